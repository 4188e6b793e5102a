use folio_import::Importer;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `folio import`. Per-file failures are reported, not raised.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = Importer::new(&ctx.service).import_paths(&args.paths).await?;
    if flags.format == OutputFormat::Table {
        println!("{report}");
        return Ok(());
    }
    output(
        &json!({
            "files": report.files,
            "created": report.created(),
            "failed": report.failed(),
            "summary": report.summary(),
        }),
        flags.format,
    )
}
