// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

/// Optionale Overrides aus .env bzw. der Umgebung
/// (Name, Beschreibung für die Warnung)
const OVERRIDES: [(&str, &str); 2] = [
    ("UART_BAUD_RATE", "Baudrate der UART-Meldungen"),
    ("SAMPLE_PERIOD_US", "Abtastperiode des Mess-Timers in µs"),
];

fn main() {
    // Lade .env file für Konfigurations-Overrides
    // Fehlt die Datei, gelten die Defaults aus config.rs
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env nicht geladen ({}), nutze Defaults", e);
    }

    // Gebe gesetzte Overrides an den Rust-Compiler weiter
    // Die Werte werden zur Compile-Zeit über option_env!() eingebacken
    for (name, what) in OVERRIDES {
        println!("cargo:rerun-if-env-changed={}", name);
        if let Ok(value) = std::env::var(name) {
            if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                println!(
                    "cargo:warning={} = '{}' ist keine Zahl ({}), Default wird genutzt",
                    name, value, what
                );
            }
            println!("cargo:rustc-env={}={}", name, value);
        }
    }

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and `esp-println` has the `defmt-espflash` feature"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 No scheduler found. Make sure `esp_rtos::start()` is called before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    match std::env::current_exe() {
        Ok(exe) => println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        ),
        Err(e) => println!("cargo:warning=Linker-Hinweise deaktiviert: {}", e),
    }
}
