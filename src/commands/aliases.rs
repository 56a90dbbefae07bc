//! Aliases command implementation

use anyhow::Result;

use subproject_sync::aliases::AliasTable;

/// Print the built-in alias table, one `name -> folder` pair per line.
pub fn execute() -> Result<()> {
    print!("{}", render(&AliasTable::builtin()));
    Ok(())
}

fn render(table: &AliasTable) -> String {
    let width = table.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    table
        .iter()
        .map(|(name, folder)| format!("{:<width$}  ->  {}\n", name, folder, width = width))
        .collect()
}
