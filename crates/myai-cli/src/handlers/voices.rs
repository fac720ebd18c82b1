//! `myai voices`.

use myai_core::Voice;

/// One line per voice, marking `default`.
pub fn voice_lines(default: Voice) -> Vec<String> {
    Voice::ALL
        .iter()
        .map(|voice| {
            let marker = if *voice == default { "*" } else { " " };
            format!("{marker} {}", voice.label())
        })
        .collect()
}

/// Print the available voices.
pub fn execute(default: Voice) {
    println!("Voices:");
    for line in voice_lines(default) {
        println!("  {line}");
    }
}
