use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use huffzz_core::{decode, encode, Dictionary, EncodedPayload};

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "huffzz",
    about = "Static Huffman compressor: packs bytes into a .zzz payload with a human-readable .dict code table",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a .zzz payload plus a .dict code table
    Compress {
        /// Source file ("-" reads stdin)
        input: PathBuf,
        /// Payload destination (default: input with its extension replaced by .zzz)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Dictionary destination (default: input with its extension replaced by .dict)
        #[arg(short, long)]
        dict: Option<PathBuf>,
    },
    /// Restore the original bytes from a payload and its dictionary
    Decompress {
        /// .zzz payload file ("-" reads stdin; --dict is then mandatory)
        input: PathBuf,
        /// Output destination (default: `<input stem>_decoded.txt`; "-" writes stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Dictionary file (default: input with its extension replaced by .dict)
        #[arg(short, long)]
        dict: Option<PathBuf>,
    },
    /// Print statistics about a dictionary file
    Inspect {
        /// .dict file to inspect
        dict: PathBuf,
        /// Print the full symbol/code table
        #[arg(long)]
        codes: bool,
    },
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn is_stdio(path: &Path) -> bool {
    path.to_str() == Some("-")
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if is_stdio(path) {
        io::stdin().lock().read_to_end(&mut buf)?;
    } else {
        File::open(path)
            .with_context(|| format!("opening input file {:?}", path))?
            .read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn load_dictionary(path: &Path) -> anyhow::Result<Dictionary> {
    // A missing dictionary is its own failure mode, reported before any
    // parse attempt so the user can tell "absent" from "unreadable".
    if !path.exists() {
        anyhow::bail!("dictionary file {:?} does not exist", path);
    }
    let mut file = File::open(path).with_context(|| format!("opening dictionary {:?}", path))?;
    Dictionary::read_from(&mut file).with_context(|| format!("parsing dictionary {:?}", path))
}

fn human_bytes(n: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut v = n as f64;
    let mut unit = 0;
    while v >= 1024.0 && unit < UNITS.len() - 1 {
        v /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", n)
    } else {
        format!("{:.2} {}", v, UNITS[unit])
    }
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_compress(
    input: PathBuf,
    output: Option<PathBuf>,
    dict: Option<PathBuf>,
) -> anyhow::Result<()> {
    let from_stdin = is_stdio(&input);
    let payload_path = match output {
        Some(p) => p,
        None if from_stdin => PathBuf::from("huffzz.zzz"),
        None => input.with_extension("zzz"),
    };
    let dict_path = match dict {
        Some(p) => p,
        None if from_stdin => PathBuf::from("huffzz.dict"),
        None => input.with_extension("dict"),
    };

    let raw = read_input(&input)?;
    let encoded = encode(&raw).with_context(|| format!("compressing {:?}", input))?;

    std::fs::write(&payload_path, encoded.payload.to_bytes())
        .with_context(|| format!("writing payload {:?}", payload_path))?;
    let mut dict_file = File::create(&dict_path)
        .with_context(|| format!("creating dictionary {:?}", dict_path))?;
    encoded
        .dictionary
        .write_to(&mut dict_file)
        .with_context(|| format!("writing dictionary {:?}", dict_path))?;

    let packed = encoded.packed_len() as u64;
    eprintln!("  raw size     : {}", human_bytes(raw.len() as u64));
    eprintln!("  packed       : {}", human_bytes(packed));
    eprintln!("  dict entries : {}", encoded.dictionary.len());
    eprintln!(
        "  rate         : {:.1}% of original",
        packed as f64 / raw.len() as f64 * 100.0
    );
    eprintln!("  payload      : {:?}", payload_path);
    eprintln!("  dictionary   : {:?}", dict_path);
    Ok(())
}

fn run_decompress(
    input: PathBuf,
    output: Option<PathBuf>,
    dict: Option<PathBuf>,
) -> anyhow::Result<()> {
    let from_stdin = is_stdio(&input);
    let dict_path = match dict {
        Some(p) => p,
        None if from_stdin => {
            anyhow::bail!("--dict is required when the payload is read from stdin")
        }
        None => input.with_extension("dict"),
    };
    let out_path = match output {
        Some(p) => p,
        None if from_stdin => PathBuf::from("huffzz_decoded.txt"),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "huffzz".to_string());
            input.with_file_name(format!("{stem}_decoded.txt"))
        }
    };

    let dictionary = load_dictionary(&dict_path)?;
    let wire = read_input(&input)?;
    let payload = EncodedPayload::from_bytes(&wire)
        .with_context(|| format!("reading payload {:?}", input))?;
    let decoded =
        decode(&payload, &dictionary).with_context(|| format!("decompressing {:?}", input))?;

    if is_stdio(&out_path) {
        io::stdout().lock().write_all(&decoded)?;
    } else {
        std::fs::write(&out_path, &decoded)
            .with_context(|| format!("writing output {:?}", out_path))?;
        eprintln!("  packed       : {}", human_bytes(wire.len() as u64));
        eprintln!("  restored     : {}", human_bytes(decoded.len() as u64));
        eprintln!("  output       : {:?}", out_path);
    }
    Ok(())
}

fn run_inspect(dict_path: PathBuf, codes: bool) -> anyhow::Result<()> {
    let dictionary = load_dictionary(&dict_path)?;

    println!("=== Dictionary: {:?} ===", dict_path);
    println!("  entries     : {}", dictionary.len());

    if dictionary.is_empty() {
        return Ok(());
    }

    let lens: Vec<usize> = dictionary.entries().iter().map(|e| e.code.len()).collect();
    let min = lens.iter().min().copied().unwrap_or(0);
    let max = lens.iter().max().copied().unwrap_or(0);
    let mean = lens.iter().sum::<usize>() as f64 / lens.len() as f64;
    println!("  code length : min {} / max {} / mean {:.2}", min, max, mean);

    if codes {
        println!();
        println!("  {:>4}  {:>4}  code", "byte", "char");
        println!("  {}", "-".repeat(28));
        for entry in dictionary.entries() {
            let ch = if entry.symbol.is_ascii_graphic() || entry.symbol == b' ' {
                entry.symbol as char
            } else {
                '.'
            };
            println!("  {:>4x}  {:>4}  {}", entry.symbol, ch, entry.code);
        }
    }

    Ok(())
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Compress {
            input,
            output,
            dict,
        } => run_compress(input, output, dict),
        Commands::Decompress {
            input,
            output,
            dict,
        } => run_decompress(input, output, dict),
        Commands::Inspect { dict, codes } => run_inspect(dict, codes),
    }
}
