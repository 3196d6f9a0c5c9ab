//! Output rendering for a resolved dependency collection.

use anyhow::Result;
use std::io::Write;

use crate::config::OutputFormat;
use crate::core::DependencyCollection;

/// Write `deps` to `output` in the requested format.
pub fn write_collection(
    output: &mut dyn Write,
    deps: &DependencyCollection,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(output, deps),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, deps)?;
            writeln!(output)?;
            Ok(())
        }
    }
}

fn write_text(output: &mut dyn Write, deps: &DependencyCollection) -> Result<()> {
    for (label, paths) in [
        ("scripts", &deps.scripts),
        ("stylesheets", &deps.stylesheets),
        ("assets", &deps.assets),
    ] {
        writeln!(output, "{} ({}):", label, paths.len())?;
        for path in paths {
            writeln!(output, "  {}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample() -> DependencyCollection {
        DependencyCollection {
            scripts: vec![PathBuf::from("/p/source/s1.js")],
            stylesheets: vec![PathBuf::from("/p/source/c1.css")],
            assets: vec![
                PathBuf::from("/p/assets/icon.png"),
                PathBuf::from("/p/assets/sprites/sprite.png"),
            ],
        }
    }

    #[test]
    fn test_text_output_sections() {
        let mut output = Vec::new();
        write_collection(&mut output, &sample(), OutputFormat::Text).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("scripts (1):"));
        assert!(text.contains("  /p/source/s1.js"));
        assert!(text.contains("stylesheets (1):"));
        assert!(text.contains("assets (2):"));
        assert!(text.contains("  /p/assets/sprites/sprite.png"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let mut output = Vec::new();
        write_collection(&mut output, &sample(), OutputFormat::Json).unwrap();

        let parsed: DependencyCollection = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_empty_collection_renders_all_sections() {
        let mut output = Vec::new();
        write_collection(&mut output, &DependencyCollection::new(), OutputFormat::Text).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("scripts (0):"));
        assert!(text.contains("stylesheets (0):"));
        assert!(text.contains("assets (0):"));
    }
}
