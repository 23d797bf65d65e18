use balanced_collections::avl_tree::AvlSet;
use balanced_collections::dataset;
use balanced_collections::error::{Error, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;

/// Builds a height-balanced ordered set from a flat file of integers and
/// prints a summary of the resulting tree. On the first run, when the data
/// file is empty, the keys are read interactively and saved for later runs.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path of the flat file holding the dataset
    #[arg(long, default_value = "files/data.txt")]
    data_file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run(&Args::parse()) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    dataset::ensure(&args.data_file)?;

    let mut keys = dataset::load(&args.data_file)?;
    if keys.is_empty() {
        keys = read_keys(&mut io::stdin().lock())?;
        dataset::save(&args.data_file, &keys)?;
        println!(
            "Saved {} keys to {}; edit that file to change the dataset.",
            keys.len(),
            args.data_file.display(),
        );
    } else {
        info!(count = keys.len(), "building tree from data file");
        println!("Loaded {} keys from {}.", keys.len(), args.data_file.display());
    }

    let set: AvlSet<i64> = keys.iter().copied().collect();
    report(&set)
}

/// Reads whitespace-separated integers from `input` until a lone `#`.
fn read_keys<R>(input: &mut R) -> Result<Vec<i64>>
where
    R: BufRead,
{
    println!("Enter integers separated by whitespace, finish with `#`:");
    print!(">>> ");
    io::stdout().flush()?;

    let mut keys = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let mut done = false;
        for token in line.split_whitespace() {
            if token == "#" {
                done = true;
                break;
            }
            keys.push(token.parse::<i64>()?);
        }
        if done {
            break;
        }
    }
    Ok(keys)
}

fn report(set: &AvlSet<i64>) -> Result<()> {
    if set.is_empty() {
        println!("The tree is empty.");
        return Ok(());
    }

    let in_order = set
        .iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("In order: {}", in_order);
    println!("Size: {}", set.len());
    println!("Height: {}", set.height());

    println!("By level:");
    for keys in set.levels() {
        let line = keys
            .iter()
            .map(|key| key.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}", line);
    }

    set.check_order()?;
    println!("Order check passed.");

    let min = set.min().ok_or(Error::EmptyTree)?;
    let max = set.max().ok_or(Error::EmptyTree)?;
    println!("Min: {}, max: {}", min, max);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::read_keys;

    #[test]
    fn test_read_keys_until_terminator() {
        let mut input: &[u8] = b"1 3 7\n4 5 # 9\n";
        assert_eq!(read_keys(&mut input).unwrap(), vec![1, 3, 7, 4, 5]);
    }

    #[test]
    fn test_read_keys_stops_at_eof() {
        let mut input: &[u8] = b"2 4 6";
        assert_eq!(read_keys(&mut input).unwrap(), vec![2, 4, 6]);
    }

    #[test]
    fn test_read_keys_rejects_garbage() {
        let mut input: &[u8] = b"1 two #\n";
        assert!(read_keys(&mut input).is_err());
    }
}
