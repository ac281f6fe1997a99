use console::style;

use forexscript_core::{Category, GeneratedScript, ScriptSegments, TranscreatedScript, format_word_counts};

fn print_segments(segments: &ScriptSegments) {
    for (title, text) in [
        ("HOOK", &segments.hook),
        ("BODY", &segments.body),
        ("CTA", &segments.cta),
    ] {
        println!("{}", style(title).yellow().bold());
        if text.is_empty() {
            println!("{}\n", style("(empty)").dim());
        } else {
            println!("{}\n", text);
        }
    }
}

pub fn print_script(script: &GeneratedScript) {
    println!("{}", style("─".repeat(60)).dim());
    println!("{}\n", style(format_word_counts(script)).cyan());
    print_segments(&script.segments);
}

pub fn print_transcreation(result: &TranscreatedScript) {
    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}\n",
        style(format!("{} Version", result.language.display_name()))
            .cyan()
            .bold()
    );
    print_segments(&result.segments);
}

pub fn print_categories(categories: &[Category]) {
    for category in categories {
        println!(
            "{}  {}",
            style(category.id.as_str()).cyan().bold(),
            style(category.name).bold()
        );
        println!("    {}", category.description);
        println!("    {} {}", style("Tone:").dim(), category.tone);
        println!("    {} {}", style("CTA:").dim(), category.cta_style);
        println!(
            "    {} {}\n",
            style("e.g.").dim(),
            category.examples.join(", ")
        );
    }
}
