//! # build 命令实现
//!
//! 将目录晶胞扩展为晶格。
//!
//! ## 功能
//! - 周期性或开放边界
//! - 打印格点数、键数和配位数统计
//! - 可选导出 sites.csv / bonds.csv
//!
//! ## 依赖关系
//! - 使用 `cli/build.rs` 定义的参数
//! - 使用 `latphys::catalog`, `latphys::models`, `latphys::export`
//! - 使用 `utils/output.rs`, `utils/size.rs`

use crate::cli::build::BuildArgs;
use crate::utils::output;
use crate::utils::size::{parse_size, to_extent};

use latphys::catalog::{Catalog, CatalogUnitcell};
use latphys::error::{LatticeError, Result};
use latphys::export;
use latphys::models::{Bond, Lattice, Site, Unitcell};

use log::info;
use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Property")]
    property: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 build 命令
pub fn execute(args: BuildArgs) -> Result<()> {
    let entry = Catalog::find(&args.name)?;
    let unitcell = entry.build(args.variant)?;
    let size = parse_size(&args.size)?;

    output::print_header(&format!(
        "Building {} lattice ({}, variant {})",
        if args.open { "open" } else { "periodic" },
        entry.name,
        args.variant
    ));

    match &unitcell {
        CatalogUnitcell::Planar(uc) => build_lattice(uc, &size, &args),
        CatalogUnitcell::Spatial(uc) => build_lattice(uc, &size, &args),
    }
}

fn build_lattice<const D: usize>(
    uc: &Unitcell<Site<i32, D>, Bond<i32, D>, D, D>,
    size: &[usize],
    args: &BuildArgs,
) -> Result<()> {
    let extent = to_extent::<D>(size)?;
    let lattice = if args.open {
        Lattice::open(uc, extent)?
    } else {
        Lattice::periodic(uc, extent)?
    };

    println!("{}", Table::new(summary_rows(&lattice)));

    if let Some(ref dir) = args.output_dir {
        write_lattice(&lattice, dir, args.overwrite)?;
    }

    Ok(())
}

fn summary_rows<const D: usize>(
    lattice: &Lattice<Site<i32, D>, Bond<i32, D>, D, D>,
) -> Vec<SummaryRow> {
    let coordinations: Vec<usize> = (0..lattice.num_sites())
        .map(|i| lattice.coordination(i))
        .collect();
    let min = coordinations.iter().min().copied().unwrap_or(0);
    let max = coordinations.iter().max().copied().unwrap_or(0);

    let row = |property: &str, value: String| SummaryRow {
        property: property.to_string(),
        value,
    };

    vec![
        row("Extent", format!("{:?}", lattice.extent())),
        row("Boundary", lattice.boundary().to_string()),
        row("Sites", lattice.num_sites().to_string()),
        row("Bonds", lattice.num_bonds().to_string()),
        row(
            "Coordination",
            if min == max {
                min.to_string()
            } else {
                format!("{}..{}", min, max)
            },
        ),
    ]
}

fn write_lattice<const D: usize>(
    lattice: &Lattice<Site<i32, D>, Bond<i32, D>, D, D>,
    dir: &Path,
    overwrite: bool,
) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| LatticeError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let sites_path = dir.join("sites.csv");
    let bonds_path = dir.join("bonds.csv");

    if !overwrite && (sites_path.exists() || bonds_path.exists()) {
        output::print_skip(&format!(
            "Output exists in '{}' (use --overwrite)",
            dir.display()
        ));
        return Ok(());
    }

    export::sites_to_csv::<_, D>(lattice.sites(), &sites_path)?;
    export::bonds_to_csv::<_, _, D, D>(lattice.bonds(), |b| lattice.bond_vector(b), &bonds_path)?;
    info!("Wrote {} and {}", sites_path.display(), bonds_path.display());

    output::print_written("sites", &sites_path);
    output::print_written("bonds", &bonds_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use latphys::catalog::spatial;

    #[test]
    fn test_summary_rows_open_cubic() {
        let uc = spatial::cubic(1).unwrap();
        let lattice = Lattice::open(&uc, [3, 3, 3]).unwrap();
        let rows = summary_rows(&lattice);
        assert_eq!(rows[2].value, "27");
        assert_eq!(rows[3].value, "108");
        assert_eq!(rows[4].value, "3..6");
    }

    #[test]
    fn test_summary_rows_periodic_uniform() {
        let uc = spatial::fcc(1).unwrap();
        let lattice = Lattice::periodic(&uc, [2, 2, 2]).unwrap();
        let rows = summary_rows(&lattice);
        assert_eq!(rows[1].value, "periodic");
        assert_eq!(rows[4].value, "12");
    }
}
