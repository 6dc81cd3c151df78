//! # 格点与键数据导出
//!
//! 导出晶胞或晶格的格点表和键表为 CSV。
//!
//! ## 支持格式
//! - 格点 CSV: index, label, x, y[, z]
//! - 键 CSV: index, from, to, label, wrap_1..wrap_N, length
//!
//! ## 依赖关系
//! - 被命令行 `build` 调用
//! - 使用 `models/`
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{LatticeError, Result};
use crate::models::{LatticeBond, LatticeSite};

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

const AXES: [&str; 3] = ["x", "y", "z"];

/// 导出格点表
pub fn sites_to_csv<S, const D: usize>(sites: &[S], output_path: &Path) -> Result<()>
where
    S: LatticeSite<D>,
    S::Label: Display,
{
    let mut wtr = csv::Writer::from_path(output_path)?;
    write_sites(&mut wtr, sites)?;
    wtr.flush().map_err(|e| LatticeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

/// 导出键表；`bond_vector` 用于计算键长
pub fn bonds_to_csv<B, F, const N: usize, const D: usize>(
    bonds: &[B],
    bond_vector: F,
    output_path: &Path,
) -> Result<()>
where
    B: LatticeBond<N>,
    B::Label: Display,
    F: Fn(&B) -> Option<[f64; D]>,
{
    let mut wtr = csv::Writer::from_path(output_path)?;
    write_bonds(&mut wtr, bonds, bond_vector)?;
    wtr.flush().map_err(|e| LatticeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

fn write_sites<W, S, const D: usize>(wtr: &mut csv::Writer<W>, sites: &[S]) -> Result<()>
where
    W: Write,
    S: LatticeSite<D>,
    S::Label: Display,
{
    let mut header = vec!["index".to_string(), "label".to_string()];
    header.extend(axis_names(D));
    wtr.write_record(&header)?;

    for (i, site) in sites.iter().enumerate() {
        let mut record = vec![i.to_string(), site.label().to_string()];
        record.extend(site.point().iter().map(|x| format!("{:.8}", x)));
        wtr.write_record(&record)?;
    }
    Ok(())
}

fn write_bonds<W, B, F, const N: usize, const D: usize>(
    wtr: &mut csv::Writer<W>,
    bonds: &[B],
    bond_vector: F,
) -> Result<()>
where
    W: Write,
    B: LatticeBond<N>,
    B::Label: Display,
    F: Fn(&B) -> Option<[f64; D]>,
{
    let mut header = vec!["index".to_string(), "from".to_string(), "to".to_string()];
    header.push("label".to_string());
    header.extend((1..=N).map(|k| format!("wrap_{}", k)));
    header.push("length".to_string());
    wtr.write_record(&header)?;

    for (i, bond) in bonds.iter().enumerate() {
        let mut record = vec![
            i.to_string(),
            bond.from().to_string(),
            bond.to().to_string(),
            bond.label().to_string(),
        ];
        record.extend(bond.wrap().iter().map(|w| w.to_string()));
        let length = bond_vector(bond)
            .map(|v| format!("{:.8}", v.iter().map(|x| x * x).sum::<f64>().sqrt()))
            .unwrap_or_default();
        record.push(length);
        wtr.write_record(&record)?;
    }
    Ok(())
}

fn axis_names(dimension: usize) -> Vec<String> {
    (0..dimension)
        .map(|d| {
            AXES.get(d)
                .map(|a| a.to_string())
                .unwrap_or_else(|| format!("x{}", d + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::planar;
    use crate::models::Lattice;

    #[test]
    fn test_axis_names() {
        assert_eq!(axis_names(2), vec!["x", "y"]);
        assert_eq!(axis_names(4), vec!["x", "y", "z", "x4"]);
    }

    #[test]
    fn test_write_sites_in_memory() {
        let uc = planar::lieb(1).unwrap();
        let mut wtr = csv::Writer::from_writer(vec![]);
        write_sites::<_, _, 2>(&mut wtr, uc.sites()).unwrap();
        let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines[0], "index,label,x,y");
        assert_eq!(lines[2], "1,2,0.50000000,0.00000000");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_write_bonds_in_memory() {
        let uc = planar::square(1).unwrap();
        let mut wtr = csv::Writer::from_writer(vec![]);
        write_bonds::<_, _, _, 2, 2>(&mut wtr, uc.bonds(), |b| uc.bond_vector(b)).unwrap();
        let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines[0], "index,from,to,label,wrap_1,wrap_2,length");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with(",1.00000000"));
    }

    #[test]
    fn test_export_lattice_files() {
        let uc = planar::triangular(1).unwrap();
        let lattice = Lattice::periodic(&uc, [2, 2]).unwrap();
        let dir = std::env::temp_dir();
        let sites_path = dir.join("latphys_test_sites.csv");
        let bonds_path = dir.join("latphys_test_bonds.csv");

        sites_to_csv::<_, 2>(lattice.sites(), &sites_path).unwrap();
        bonds_to_csv::<_, _, 2, 2>(lattice.bonds(), |b| lattice.bond_vector(b), &bonds_path)
            .unwrap();

        let sites = std::fs::read_to_string(&sites_path).unwrap();
        let bonds = std::fs::read_to_string(&bonds_path).unwrap();
        assert_eq!(sites.lines().count(), 1 + 4);
        assert_eq!(bonds.lines().count(), 1 + 24);

        std::fs::remove_file(&sites_path).ok();
        std::fs::remove_file(&bonds_path).ok();
    }
}
