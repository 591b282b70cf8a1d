//! # gds3dtech
//!
//! PDK Layer Data to GDS3D Techfile Converter
//!

use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;

use gds3d21::utils::SerializationFormat::Json;
use gds3d21::{StackConfig, TechfileHeader};

// => The doc-comment on `ProgramOptions` here is displayed by the `clap`-generated help docs =>

/// PDK Layer Data to GDS3D Techfile Converter
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct ProgramOptions {
    /// KLayout Layer-Properties Input File
    #[arg(short, long, default_value = "sg13g2.lyp")]
    lyp: PathBuf,
    /// LEF Technology Input File
    #[arg(short = 't', long, default_value = "sg13g2_tech.lef")]
    lef: PathBuf,
    /// Techfile Output File
    #[arg(short, long, default_value = "sg13g2.txt")]
    output: PathBuf,
    /// Layer-Stack Configuration File (.json, .yaml or .toml). Defaults to the built-in SG13G2 stack.
    #[arg(short, long)]
    stack: Option<PathBuf>,
    /// Write the layer-stack configuration in use to this file
    #[arg(long)]
    dump_stack: Option<PathBuf>,
    /// Write the JSON schema of layer-stack configuration files to this file, and exit
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Process Name for the Techfile Header
    #[arg(short, long)]
    process: Option<String>,
    /// Verbose Output Mode
    #[arg(short, long)]
    verbose: bool,
}

/// The main entry point.
/// All logic is offloaded to `_main` for sake of testing.
fn main() -> Result<(), Box<dyn Error>> {
    let options = ProgramOptions::parse();
    init_logging(options.verbose);
    _main(&options)
}

/// Log to stderr, at `info` level or `debug` in verbose mode, unless `RUST_LOG` says otherwise
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// All the real logic, with `ProgramOptions` argument for sake of testing
fn _main(options: &ProgramOptions) -> Result<(), Box<dyn Error>> {
    if let Some(ref path) = options.schema {
        Json.save(&StackConfig::schema(), path)?;
        info!("Wrote layer-stack schema to {:?}", path);
        return Ok(());
    }

    let mut config = match options.stack {
        Some(ref path) => StackConfig::load(path)?,
        None => StackConfig::sg13g2(),
    };
    if let Some(ref process) = options.process {
        config.process = process.clone();
    }
    if let Some(ref path) = options.dump_stack {
        config.store(path)?;
        info!("Wrote layer stack to {:?}", path);
    }

    // Load and merge both inputs before anything is written
    let stack = gds3d21::generate(&config, &options.lyp, &options.lef)?;
    let header = TechfileHeader::now(&config.process);
    stack.save_techfile(&header, &options.output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn converts_sg13g2() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let options = ProgramOptions {
            output: dir.path().join("sg13g2.txt"),
            dump_stack: Some(dir.path().join("stack.yaml")),
            ..options()
        };
        _main(&options)?;

        let s = std::fs::read_to_string(&options.output)?;
        assert!(s.starts_with("# Autogenerated GDS3D techfile\n# Process : IHP 130nm open source\n"));
        assert_eq!(s.matches("LayerStart: ").count(), 21);
        assert_eq!(s.matches("LayerEnd\n\n").count(), 21);

        // Layer properties and LEF dimensions
        assert!(s.contains("LayerStart: Metal1\nLayer: 8\nDatatype: 0\nHeight: 640\nThickness: 420\nRed: 0.22\nGreen: 0.75\nBlue: 1.00\nFilter: 0.0\nMetal: 1\nShow: 1\nLayerEnd\n"));
        assert!(s.contains("LayerStart: TopMetal2\nLayer: 134\nDatatype: 0\nHeight: 11220\nThickness: 3000\n"));
        // Interpolated vias
        assert!(s.contains("LayerStart: Via1\nLayer: 19\nDatatype: 0\nHeight: 1060\nThickness: 540\n"));
        assert!(s.contains("LayerStart: TopVia2\nLayer: 133\nDatatype: 0\nHeight: 8420\nThickness: 2800\n"));
        // Substrate is always GDS layer 255
        assert!(s.contains("LayerStart: Substrate\nLayer: 255\n"));

        // The dumped stack is the built-in one
        let dumped = StackConfig::load(dir.path().join("stack.yaml"))?;
        assert_eq!(dumped, StackConfig::sg13g2());
        Ok(())
    }

    #[test]
    fn uses_stack_files() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let stack_path = dir.path().join("stack.toml");
        let mut config = StackConfig::sg13g2();
        config.process = "From Stack File".into();
        config.layers.truncate(10); // Substrate through Metal2
        config.store(&stack_path)?;

        let options = ProgramOptions {
            output: dir.path().join("out.txt"),
            stack: Some(stack_path),
            ..options()
        };
        _main(&options)?;
        let s = std::fs::read_to_string(&options.output)?;
        assert!(s.contains("# Process : From Stack File\n"));
        assert_eq!(s.matches("LayerStart: ").count(), 10);
        assert!(s.trim_end().ends_with("LayerStart: Metal2\nLayer: 10\nDatatype: 0\nHeight: 1600\nThickness: 490\nRed: 0.80\nGreen: 0.80\nBlue: 1.00\nFilter: 0.0\nMetal: 1\nShow: 1\nLayerEnd"));

        // Command-line process names take precedence
        let options = ProgramOptions {
            process: Some("From Options".into()),
            ..options
        };
        _main(&options)?;
        let s = std::fs::read_to_string(&options.output)?;
        assert!(s.contains("# Process : From Options\n"));
        Ok(())
    }

    #[test]
    fn writes_nothing_on_failure() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let options = ProgramOptions {
            lef: resource("missing.lef").into(),
            output: dir.path().join("sg13g2.txt"),
            ..options()
        };
        assert!(_main(&options).is_err());
        assert!(!options.output.exists());

        let options = ProgramOptions {
            lyp: resource("missing.lyp").into(),
            ..options
        };
        assert!(_main(&options).is_err());
        assert!(!options.output.exists());
        Ok(())
    }

    #[test]
    fn writes_schema() -> Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let options = ProgramOptions {
            schema: Some(dir.path().join("stack.schema.json")),
            output: dir.path().join("sg13g2.txt"),
            ..options()
        };
        _main(&options)?;
        let schema = std::fs::read_to_string(dir.path().join("stack.schema.json"))?;
        assert!(schema.contains("\"lef_layers\""));
        // Schema mode stops before conversion
        assert!(!Path::new(&options.output).exists());
        Ok(())
    }

    #[test]
    fn parses_arguments() {
        let options = ProgramOptions::parse_from(["gds3dtech"]);
        assert_eq!(options.lyp, PathBuf::from("sg13g2.lyp"));
        assert_eq!(options.lef, PathBuf::from("sg13g2_tech.lef"));
        assert_eq!(options.output, PathBuf::from("sg13g2.txt"));
        assert!(options.stack.is_none());
        assert!(!options.verbose);

        let options = ProgramOptions::parse_from([
            "gds3dtech", "-l", "a.lyp", "-t", "b.lef", "-o", "c.txt", "-s", "d.yaml", "-p", "X", "-v",
        ]);
        assert_eq!(options.lyp, PathBuf::from("a.lyp"));
        assert_eq!(options.lef, PathBuf::from("b.lef"));
        assert_eq!(options.output, PathBuf::from("c.txt"));
        assert_eq!(options.stack, Some(PathBuf::from("d.yaml")));
        assert_eq!(options.process.as_deref(), Some("X"));
        assert!(options.verbose);
    }

    /// Options reading the resource inputs
    fn options() -> ProgramOptions {
        ProgramOptions {
            lyp: resource("sg13g2.lyp").into(),
            lef: resource("sg13g2_tech.lef").into(),
            output: PathBuf::from("sg13g2.txt"),
            stack: None,
            dump_stack: None,
            schema: None,
            process: None,
            verbose: true,
        }
    }

    /// Grab the full path of resource-file `rname`
    fn resource(rname: &str) -> String {
        format!("{}/resources/{}", env!("CARGO_MANIFEST_DIR"), rname)
    }
}
