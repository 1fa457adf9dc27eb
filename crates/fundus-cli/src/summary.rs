use std::path::Path;

use console::Style;
use fundus_core::capture::BurstResult;
use fundus_core::frame::Eye;
use fundus_core::pipeline::config::PipelineConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
    best: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            best: Style::new().green().bold(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig, eye: Eye, output: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Fundus Capture"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Eye"), s.value.apply_to(eye));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Burst"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Grabs"),
        s.value.apply_to(config.burst.count)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Delay"),
        s.value.apply_to(format!("{} ms", config.burst.inter_frame_delay_ms))
    );
    println!();

    println!("  {}", s.header.apply_to("Processing"));
    match config.crop {
        Some(ref c) => println!(
            "    {:<12}{}",
            s.label.apply_to("Crop"),
            s.value.apply_to(format!(
                "center ({:.0}, {:.0}), radii ({:.0}, {:.0}), rotation {:.2}",
                c.cx, c.cy, c.rx, c.ry, c.rotation
            ))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Crop"),
            s.disabled.apply_to("disabled")
        ),
    }
    match config.enhancement {
        Some(ref e) => println!(
            "    {:<12}{}",
            s.label.apply_to("Enhance"),
            s.value.apply_to(format!(
                "tile {} px, clip {}",
                e.tile_size, e.clip_limit
            ))
        ),
        None => println!(
            "    {:<12}{}",
            s.label.apply_to("Enhance"),
            s.disabled.apply_to("disabled")
        ),
    }
    if config.red_free {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Red-free"),
            s.value.apply_to("on")
        );
    }
    println!();
}

pub fn print_scores(burst: &BurstResult) {
    let s = Styles::new();

    println!();
    println!(
        "  {} {}",
        s.header.apply_to("Burst"),
        s.label.apply_to(format!(
            "({} of {} grabs usable)",
            burst.frames.len(),
            burst.attempts
        ))
    );
    for (i, scored) in burst.frames.iter().enumerate() {
        let line = format!("    #{:<4}{:>12.3}", i, scored.score.0);
        if i == burst.best_index {
            println!("{}  {}", s.best.apply_to(line), s.best.apply_to("best"));
        } else {
            println!("{}", line);
        }
    }
}
