use kernel_tools::{
    catalog::CatalogBuilder,
    config::CatalogConfig,
    email_support,
};
use serde_json::json;

// Prints the email-support tool catalog, then dispatches one call the way an
// orchestrator would after planning.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = match std::env::args().nth(1) {
        Some(path) => CatalogConfig::from_file(path)?,
        None => CatalogConfig::default(),
    };
    let builder = CatalogBuilder::with_config(config);
    let namespace = email_support::namespace();

    println!("{}", builder.build_catalog(&namespace)?);

    let registry = builder.collect_registry(&namespace);
    let out = registry
        .dispatch(
            "send_welcome_email",
            json!({
                "human_email": "hr@contoso.com",
                "employee_name": "Jane Doe",
                "personal_email_address": "jane@personal.com",
            }),
        )
        .await?;
    println!("{out}");
    Ok(())
}
