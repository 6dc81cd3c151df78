//! # list 命令实现
//!
//! 以表格列出预置晶胞目录。
//!
//! ## 依赖关系
//! - 使用 `cli/list.rs` 定义的参数
//! - 使用 `latphys::catalog`
//! - 使用 `utils/output.rs`

use crate::cli::list::ListArgs;
use crate::utils::output;

use latphys::catalog::{Catalog, CatalogEntry};
use latphys::error::Result;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
struct EntryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "D")]
    dimension: usize,
    #[tabled(rename = "Variant")]
    variant: String,
    #[tabled(rename = "Sites")]
    sites: usize,
    #[tabled(rename = "Bonds")]
    bonds: usize,
    #[tabled(rename = "Description")]
    description: String,
}

/// 执行 list 命令
pub fn execute(args: ListArgs) -> Result<()> {
    let entries: Vec<&CatalogEntry> = Catalog::matching(&args.filter)?
        .into_iter()
        .filter(|e| {
            args.dimension
                .map_or(true, |d| e.dimension() == usize::from(d))
        })
        .collect();

    if entries.is_empty() {
        output::print_warning(&format!("No unitcells match '{}'", args.filter));
        return Ok(());
    }

    let rows = entry_rows(&entries)?;

    output::print_header(&format!("{} Pre-built Unitcell(s)", entries.len()));
    println!("{}", Table::new(&rows));
    Ok(())
}

/// 每个变体一行
fn entry_rows(entries: &[&CatalogEntry]) -> Result<Vec<EntryRow>> {
    let mut rows = Vec::new();
    for entry in entries {
        for (variant, note) in entry.variants {
            let unitcell = entry.build(*variant)?;
            rows.push(EntryRow {
                name: entry.name.to_string(),
                dimension: entry.dimension(),
                variant: format!("{} ({})", variant, note),
                sites: unitcell.num_sites(),
                bonds: unitcell.num_bonds(),
                description: entry.description.to_string(),
            });
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_rows_one_per_variant() {
        let entries = Catalog::matching("fcc").unwrap();
        let rows = entry_rows(&entries).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sites, 1);
        assert_eq!(rows[1].sites, 4);
        assert_eq!(rows[1].bonds, 48);
        assert_eq!(rows[1].variant, "2 (conventional)");
    }
}
