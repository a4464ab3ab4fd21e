use msbt_reader::{ParseOptions, UnknownSectionPolicy, read_file_with_options};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-msbt-file> [--lenient] [--strict-attributes]", args[0]);
        std::process::exit(1);
    }

    let msbt_path = &args[1];
    let mut options = ParseOptions::new();
    if args.iter().any(|arg| arg == "--lenient") {
        options = options.unknown_sections(UnknownSectionPolicy::Skip);
    }
    if args.iter().any(|arg| arg == "--strict-attributes") {
        options = options.strict_attribute_count(true);
    }

    println!("Reading MSBT file: {}", msbt_path);
    println!("{}", "=".repeat(60));

    match read_file_with_options(msbt_path, &options) {
        Ok(document) => {
            println!("\nMessage Table Information:");
            println!("  Byte order: {}", document.byte_order);
            println!("  Sections: {}", document.section_count);
            println!("  Declared size: {} bytes", document.declared_file_size);
            for section in &document.sections {
                println!(
                    "    {} @ {:#x}: {} bytes{}",
                    section.tag,
                    section.header_offset,
                    section.size,
                    if section.decoded { "" } else { " (skipped)" }
                );
            }

            println!("\nStatistics:");
            println!("  Labels: {}", document.labels.len());
            println!("  Messages: {}", document.messages.len());
            println!("  Attributes: {} x {} bytes", document.attributes.len(), document.attribute_size);

            println!("\nSample Entries (first 10):");
            for (i, entry) in document.entries().take(10).enumerate() {
                println!(
                    "  {}. [{}] {} = {:?}",
                    i + 1,
                    entry.message_index,
                    entry.name,
                    entry.text.unwrap_or("<missing>")
                );
            }
            if document.labels.len() > 10 {
                println!("  ... and {} more", document.labels.len() - 10);
            }

            if document.has_warnings() {
                println!("\nWarnings:");
                for warning in &document.warnings {
                    println!("  - {}", warning);
                }
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read MSBT file");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
