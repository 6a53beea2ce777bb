use crate::core::io::traits::StructureFile;
use crate::core::models::atom::{Atom, AtomInfo};
use crate::core::models::cell::Cell;
use crate::core::models::structure::Structure;
use nalgebra::{Matrix3, Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TomlFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FileStructure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unitcell: Option<Vec<usize>>,
    cell: FileCell,
    #[serde(default)]
    atoms: Vec<FileAtom>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FileCell {
    lattice: [[f64; 3]; 3],
    #[serde(default = "default_pbc")]
    pbc: [bool; 3],
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FileAtom {
    symbol: String,
    position: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    velocity: Option<[f64; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    basis: Option<usize>,
}

fn default_pbc() -> [bool; 3] {
    [true; 3]
}

/// TOML structure description.
///
/// ```toml
/// unitcell = [0, 1]
///
/// [cell]
/// lattice = [[5.43, 0.0, 0.0], [0.0, 5.43, 0.0], [0.0, 0.0, 5.43]]
/// pbc = [true, true, true]
///
/// [[atoms]]
/// symbol = "Si"
/// position = [0.0, 0.0, 0.0]
/// velocity = [0.01, 0.0, 0.0]
/// basis = 0
/// ```
pub struct TomlStructureFile;

impl StructureFile for TomlStructureFile {
    type Error = TomlFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let file: FileStructure = toml::from_str(&content)?;

        let [a, b, c] = file.cell.lattice;
        let cell = Cell::new(
            Vector3::from(a),
            Vector3::from(b),
            Vector3::from(c),
            file.cell.pbc,
        );

        let mut structure = Structure::new(cell);
        for file_atom in file.atoms {
            let atom = Atom::new(&file_atom.symbol, Point3::from(file_atom.position));
            let info = AtomInfo {
                velocity: file_atom.velocity.map(Vector3::from),
                basis: file_atom.basis,
            };
            structure.push(atom, info);
        }

        if let Some(unitcell) = file.unitcell {
            if let Some(&bad) = unitcell.iter().find(|&&idx| idx >= structure.len()) {
                return Err(TomlFileError::Inconsistency(format!(
                    "Unit-cell atom index {} is out of range for {} atoms",
                    bad,
                    structure.len()
                )));
            }
            structure.set_unitcell(unitcell);
        }

        Ok(structure)
    }

    fn write_to(structure: &Structure, writer: &mut impl Write) -> Result<(), Self::Error> {
        let lattice: Matrix3<f64> = structure.cell().lattice;
        let row = |axis: usize| -> [f64; 3] { lattice.row(axis).transpose().into() };

        let file = FileStructure {
            unitcell: structure.unitcell().map(<[usize]>::to_vec),
            cell: FileCell {
                lattice: [row(0), row(1), row(2)],
                pbc: structure.cell().pbc,
            },
            atoms: structure
                .iter()
                .map(|(_, atom, info)| FileAtom {
                    symbol: atom.symbol.clone(),
                    position: atom.position.coords.into(),
                    velocity: info.velocity.map(Into::into),
                    basis: info.basis,
                })
                .collect(),
        };

        let content = toml::to_string(&file)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }
}
