use inidoc::IniFile;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-ini-file>", args[0]);
        std::process::exit(1);
    }

    let ini_path = &args[1];
    println!("Reading configuration file: {}", ini_path);
    println!("{}", "=".repeat(60));

    let mut ini = IniFile::new(ini_path);
    if let Err(e) = ini.load() {
        eprintln!("\nERROR: Failed to read configuration file");
        eprintln!("  {}", e);
        std::process::exit(1);
    }

    let doc = ini.document();
    println!("\nStatistics:");
    println!("  Section declarations: {}", ini.section_count());

    for name in doc.section_order() {
        let Some(section) = doc.section(name) else {
            continue;
        };
        let label = if name.is_empty() { "<root>" } else { name.as_str() };
        println!("\n[{}] ({} keys)", label, section.key_count());
        for key_name in section.key_order().iter().take(10) {
            if let Some(key) = section.key(key_name) {
                println!("  {} = {}", key_name, key.value);
            }
        }
        if section.key_count() > 10 {
            println!("  ... and {} more", section.key_count() - 10);
        }
    }
}
