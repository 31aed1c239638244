use utoipa::OpenApi;
use novel_portal::openapi::ApiDoc;

fn main() -> anyhow::Result<()> {
    let yaml = ApiDoc::openapi().to_yaml()?;
    println!("{}", yaml);
    Ok(())
}
