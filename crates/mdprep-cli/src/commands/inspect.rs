use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use mdprep::core::io::{toml_file::TomlStructureFile, traits::StructureFile};
use mdprep::core::models::structure::Structure;
use std::collections::BTreeMap;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Loading structure from {:?}", &args.input);
    let structure =
        TomlStructureFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;

    print!("{}", summarize(&structure));
    Ok(())
}

fn summarize(structure: &Structure) -> String {
    let cell = structure.cell();
    let with_basis = structure
        .atom_infos()
        .iter()
        .filter(|i| i.basis.is_some())
        .count();
    let with_velocity = structure
        .atom_infos()
        .iter()
        .filter(|i| i.velocity.is_some())
        .count();

    let mut species: BTreeMap<&str, usize> = BTreeMap::new();
    for atom in structure.atoms() {
        *species.entry(atom.symbol.as_str()).or_default() += 1;
    }
    let species = species
        .iter()
        .map(|(symbol, count)| format!("{} x{}", symbol, count))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("Atoms:            {}", structure.len()),
        format!("Species:          {}", species),
    ];
    for (axis, label) in ["a", "b", "c"].iter().enumerate() {
        let v = cell.vector(axis);
        lines.push(format!(
            "Cell {}:           [{:.6}, {:.6}, {:.6}]",
            label, v.x, v.y, v.z
        ));
    }
    lines.push(format!("Periodic:         {:?}", cell.pbc));
    lines.push(match structure.unitcell() {
        Some(unitcell) => format!("Unit cell:        {:?}", unitcell),
        None => "Unit cell:        (not assigned)".to_string(),
    });
    lines.push(format!("With basis:       {}", with_basis));
    lines.push(format!("With velocity:    {}", with_velocity));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdprep::core::models::cell::Cell;
    use mdprep::engine::basis::add_basis;
    use nalgebra::Point3;

    #[test]
    fn summary_lists_annotations() {
        let mut structure = Structure::new(Cell::orthorhombic(2.0, 3.0, 4.0));
        structure.add_atom("Si", Point3::origin());
        structure.add_atom("Si", Point3::new(1.0, 1.0, 1.0));
        structure.add_atom("O", Point3::new(0.5, 0.5, 0.5));
        add_basis(&mut structure, None, None).unwrap();

        let summary = summarize(&structure);

        assert!(summary.contains("Atoms:            3"));
        assert!(summary.contains("Species:          O x1, Si x2"));
        assert!(summary.contains("Cell b:           [0.000000, 3.000000, 0.000000]"));
        assert!(summary.contains("Unit cell:        [0, 1, 2]"));
        assert!(summary.contains("With basis:       3"));
        assert!(summary.contains("With velocity:    0"));
    }

    #[test]
    fn unannotated_structure_reports_missing_unitcell() {
        let structure = Structure::new(Cell::default());
        let summary = summarize(&structure);
        assert!(summary.contains("(not assigned)"));
        assert!(summary.ends_with("With velocity:    0\n"));
    }
}
