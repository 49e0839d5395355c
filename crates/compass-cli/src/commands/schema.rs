use anyhow::Context;
use compass_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `compass schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    if args.list {
        return output(&registry.list(), flags.format);
    }
    let schema = registry.get(&args.name).with_context(|| {
        format!(
            "unknown schema '{}' (available: {})",
            args.name,
            registry.list().join(", ")
        )
    })?;
    output(schema, flags.format)
}
