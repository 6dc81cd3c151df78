//! # show 命令实现
//!
//! 显示单个晶胞的 Bravais 向量、格点和键。
//!
//! ## 依赖关系
//! - 使用 `cli/show.rs` 定义的参数
//! - 使用 `latphys::catalog`, `latphys::models`
//! - 使用 `utils/output.rs`

use crate::cli::show::ShowArgs;
use crate::utils::output;

use latphys::catalog::{Catalog, CatalogUnitcell};
use latphys::error::Result;
use latphys::models::{Bond, LatticeBond, LatticeSite, Site, Unitcell};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct VectorRow {
    #[tabled(rename = "Vector")]
    name: String,
    #[tabled(rename = "Components")]
    components: String,
    #[tabled(rename = "Length")]
    length: String,
}

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Point")]
    point: String,
    #[tabled(rename = "Coordination")]
    coordination: usize,
}

#[derive(Tabled)]
struct BondRow {
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "From")]
    from: usize,
    #[tabled(rename = "To")]
    to: usize,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Wrap")]
    wrap: String,
    #[tabled(rename = "Length")]
    length: String,
}

/// 执行 show 命令
pub fn execute(args: ShowArgs) -> Result<()> {
    let entry = Catalog::find(&args.name)?;
    let unitcell = entry.build(args.variant)?;

    output::print_header(&format!(
        "{} (variant {}): {}",
        entry.name, args.variant, entry.description
    ));

    match &unitcell {
        CatalogUnitcell::Planar(uc) => print_unitcell(uc, !args.no_bonds),
        CatalogUnitcell::Spatial(uc) => print_unitcell(uc, !args.no_bonds),
    }

    output::print_separator();
    output::print_counts(
        unitcell.num_sites(),
        unitcell.num_bonds(),
        unitcell.num_lattice_vectors(),
    );
    Ok(())
}

fn print_unitcell<const D: usize>(
    uc: &Unitcell<Site<i32, D>, Bond<i32, D>, D, D>,
    with_bonds: bool,
) {
    println!("{}", Table::new(vector_rows(uc)));
    println!();
    println!("{}", Table::new(site_rows(uc)));

    if with_bonds {
        println!();
        println!("{}", Table::new(bond_rows(uc)));
    }

    if let Some(volume) = uc.volume() {
        println!();
        output::print_info(&format!("Unitcell volume: {:.6}", volume));
    }
}

fn vector_rows<const D: usize>(uc: &Unitcell<Site<i32, D>, Bond<i32, D>, D, D>) -> Vec<VectorRow> {
    uc.lattice_vectors()
        .iter()
        .enumerate()
        .map(|(k, v)| VectorRow {
            name: format!("a{}", k + 1),
            components: format_point(v),
            length: format!("{:.6}", norm(v)),
        })
        .collect()
}

fn site_rows<const D: usize>(uc: &Unitcell<Site<i32, D>, Bond<i32, D>, D, D>) -> Vec<SiteRow> {
    uc.sites()
        .iter()
        .enumerate()
        .map(|(i, s)| SiteRow {
            index: i,
            label: s.label().to_string(),
            point: format_point(s.point()),
            coordination: uc.coordination(i),
        })
        .collect()
}

fn bond_rows<const D: usize>(uc: &Unitcell<Site<i32, D>, Bond<i32, D>, D, D>) -> Vec<BondRow> {
    uc.bonds()
        .iter()
        .enumerate()
        .map(|(i, b)| BondRow {
            index: i,
            from: LatticeBond::from(b),
            to: b.to(),
            label: b.label().to_string(),
            wrap: format!("{:?}", b.wrap()),
            length: uc
                .bond_vector(b)
                .map(|v| format!("{:.6}", norm(&v)))
                .unwrap_or_default(),
        })
        .collect()
}

fn format_point(point: &[f64]) -> String {
    let parts: Vec<String> = point.iter().map(|x| format!("{:.4}", x)).collect();
    format!("({})", parts.join(", "))
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
