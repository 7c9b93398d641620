use anyhow::{Context, Result};
use impactmap::{ColumnMap, DataSource, FrameSource};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::AuthoritiesArgs) -> Result<()> {
    let source = FrameSource::read_csv(&args.input, ColumnMap::default())
        .with_context(|| format!("[authorities] failed to read {}", args.input.display()))?;

    for authority in source.groups()? {
        println!("{authority}");
    }

    Ok(())
}
