//! # Patio Configurator CLI
//!
//! Terminal front end for the patio roof engines. Reads a configuration
//! (interactively or from a JSON file), prints the structural layout and an
//! itemized quote, and saves or reloads `.pcq` quote files.
//!
//! ```text
//! patio_cli                                   prompt for size and option codes
//! patio_cli terrace.json                      read a configuration document
//! patio_cli terrace.json --save terrace.pcq   also save the quote
//! patio_cli --load terrace.pcq                print a saved quote
//! patio_cli terrace.json --bilinear           interpolate the price grids
//! ```
//!
//! Set `RUST_LOG=patio_core=debug` to trace the engines.

mod file_io;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use patio_core::configuration::{
    Configuration, DeliveryOption, FrameColor, MountType, PostLength, PostMounting, RoofCovering, RoofSlope,
    SidePanelOption, MAX_GUTTER_HEIGHT_MM, MAX_WIDTH_MM, MIN_GUTTER_HEIGHT_MM,
};
use patio_core::errors::{CalcError, CalcResult};
use patio_core::geometry::{SupportKind, SupportRow};
use patio_core::pricing::catalog::{accessory_price, Accessory};
use patio_core::pricing::GridPolicy;
use patio_core::quote::Quote;

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    load_path: Option<PathBuf>,
    policy: GridPolicy,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> CalcResult<Args> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--save" => parsed.save_path = Some(path_value(&mut args, "--save")?),
                "--load" => parsed.load_path = Some(path_value(&mut args, "--load")?),
                "--bilinear" => parsed.policy = GridPolicy::Bilinear,
                flag if flag.starts_with("--") => {
                    return Err(CalcError::unknown_option("argument", flag));
                }
                _ => parsed.config_path = Some(PathBuf::from(&arg)),
            }
        }
        Ok(parsed)
    }
}

fn path_value(args: &mut impl Iterator<Item = String>, flag: &str) -> CalcResult<PathBuf> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| CalcError::invalid_input(flag, "", "Expected a file path"))
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input)
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|input| input.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse an option code, keeping `default` for blank input.
fn parse_option<T: FromStr<Err = CalcError>>(input: &str, default: T) -> CalcResult<T> {
    let input = input.trim();
    if input.is_empty() {
        Ok(default)
    } else {
        input.parse()
    }
}

/// Ask for one of `choices` by catalog code.
fn prompt_option<T, const N: usize>(
    label: &str,
    choices: [T; N],
    code: fn(&T) -> &'static str,
    default: T,
) -> CalcResult<T>
where
    T: FromStr<Err = CalcError>,
{
    let codes: Vec<&str> = choices.iter().map(code).collect();
    let prompt = format!("{} ({}) [{}]: ", label, codes.join(", "), code(&default));
    match read_line(&prompt) {
        Some(input) => parse_option(&input, default),
        None => Ok(default),
    }
}

fn prompt_configuration() -> CalcResult<Configuration> {
    let defaults = Configuration::default();

    let mount_type = prompt_option("Mounting", MountType::ALL, MountType::code, defaults.mount_type)?;
    let roof_covering = prompt_option("Roof covering", RoofCovering::ALL, RoofCovering::code, defaults.roof_covering)?;
    let max_depth = roof_covering.max_depth_mm();

    let width = prompt_f64(
        &format!("Enter width (mm, up to {:.0}) [{:.0}]: ", MAX_WIDTH_MM, defaults.width_mm),
        defaults.width_mm,
    );
    let depth = prompt_f64(
        &format!("Enter depth (mm, up to {:.0}) [{:.0}]: ", max_depth, defaults.depth_mm),
        defaults.depth_mm,
    );
    let gutter = prompt_f64(
        &format!(
            "Enter gutter height (mm, {:.0}-{:.0}) [{:.0}]: ",
            MIN_GUTTER_HEIGHT_MM, MAX_GUTTER_HEIGHT_MM, defaults.gutter_height_mm
        ),
        defaults.gutter_height_mm,
    );

    let roof_slope = prompt_option("Roof slope (degrees)", RoofSlope::ALL, RoofSlope::code, defaults.roof_slope)?;
    let side_left = prompt_option(
        "Left side panel",
        SidePanelOption::ALL,
        SidePanelOption::code,
        defaults.side_panel_left,
    )?;
    let side_right = prompt_option(
        "Right side panel",
        SidePanelOption::ALL,
        SidePanelOption::code,
        defaults.side_panel_right,
    )?;

    let mut config = defaults
        .with_mount_type(mount_type)
        .with_roof_covering(roof_covering)
        .with_size(width, depth)
        .with_gutter_height(gutter)
        .with_roof_slope(roof_slope)
        .with_side_panels(side_left, side_right);

    config.post_length = prompt_option("Post length (mm)", PostLength::ALL, PostLength::code, config.post_length)?;
    config.post_mounting =
        prompt_option("Post mounting", PostMounting::ALL, PostMounting::code, config.post_mounting)?;
    config.delivery_option =
        prompt_option("Delivery", DeliveryOption::ALL, DeliveryOption::code, config.delivery_option)?;
    config.frame_color = prompt_option("Frame colour", FrameColor::ALL, FrameColor::code, config.frame_color)?;

    Ok(config)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Patio Roof Configurator");
    println!("=======================");
    println!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> CalcResult<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    tracing::debug!(?args, "parsed arguments");

    if let Some(path) = &args.load_path {
        let quote = file_io::load_quote(path)?;
        println!("Loaded {} (quote {})", path.display(), quote.meta.id);
        println!();
        print_report(&quote);
        return Ok(());
    }

    let config = match &args.config_path {
        Some(path) => file_io::load_configuration(path)?,
        None => prompt_configuration()?,
    };

    let quote = Quote::build_with(config, args.policy)?;
    print_report(&quote);
    print_accessories(&quote.configuration);

    println!();
    println!("JSON Output:");
    println!("{}", serde_json::to_string_pretty(&quote)?);

    if let Some(path) = &args.save_path {
        file_io::save_quote(&quote, path)?;
        println!();
        println!("Saved quote to {}", path.display());
    }
    Ok(())
}

fn print_report(quote: &Quote) {
    let config = &quote.configuration;
    let layout = &quote.layout;
    let price = &quote.price;

    println!("═══════════════════════════════════════");
    println!("  CONFIGURATION");
    println!("═══════════════════════════════════════");
    println!("  Size:       {:.0} x {:.0} mm", config.width_mm, config.depth_mm);
    println!("  Gutter:     {:.0} mm", config.gutter_height_mm);
    println!(
        "  Slope:      {} ({:.0} mm fall per metre)",
        config.roof_slope,
        config.roof_slope.fall_per_meter_mm()
    );
    println!("  Mounting:   {}", config.mount_type);
    println!("  Covering:   {}", config.roof_covering);
    println!("  Frame:      {}", config.frame_color);
    println!("  Sides:      {} / {}", config.side_panel_left, config.side_panel_right);
    println!();

    println!("Layout:");
    println!("  Front edge height: {:.3} m", layout.front_height);
    println!("  Back edge height:  {:.3} m", layout.back_height);
    for support in &layout.post_supports {
        let row = match support.row {
            SupportRow::Front => "front",
            SupportRow::Back => "back",
        };
        let kind = match support.kind {
            SupportKind::Post => "post",
            SupportKind::WallAnchor => "wall anchor",
        };
        println!(
            "  {:<5} {:<5} {:<11} h = {:.3} m at ({:.3}, {:.3})",
            row,
            format!("{:?}", support.side).to_lowercase(),
            kind,
            support.height,
            support.position.x,
            support.position.z
        );
    }
    println!("  Rafters:    {}", layout.rafters.len());
    println!("  Side panels: {}", layout.side_panels.len());
    println!();

    println!("Price ({}):", price.grid_policy.display_name());
    for (label, amount) in price.line_items() {
        if amount != 0.0 {
            println!("  {:<18} {:>10.2} EUR", label, amount);
        }
    }
    println!("  {:<18} {:>10}", "", "----------");
    println!("  {:<18} {:>10.2} EUR", "Total", price.total_price);
}

fn print_accessories(config: &Configuration) {
    println!();
    println!("Optional accessories (not included):");
    for accessory in Accessory::ALL {
        match accessory_price(accessory, config) {
            Ok(amount) => println!("  {:<22} {:>10.2} EUR", accessory.display_name(), amount),
            Err(e) => println!("  {:<22} {:>10}   ({})", accessory.display_name(), "n/a", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CalcResult<Args> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_config_and_save() {
        let parsed = args(&["terrace.json", "--save", "terrace.pcq", "--bilinear"]).unwrap();
        assert_eq!(parsed.config_path, Some(PathBuf::from("terrace.json")));
        assert_eq!(parsed.save_path, Some(PathBuf::from("terrace.pcq")));
        assert_eq!(parsed.policy, GridPolicy::Bilinear);
        assert!(parsed.load_path.is_none());
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = args(&[]).unwrap();
        assert!(parsed.config_path.is_none());
        assert_eq!(parsed.policy, GridPolicy::Snap);
    }

    #[test]
    fn test_missing_flag_value() {
        let err = args(&["--load"]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_flag() {
        let err = args(&["--verbose"]).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_OPTION");
    }

    #[test]
    fn test_blank_option_keeps_default() {
        assert_eq!(parse_option("\n", RoofSlope::Deg8).unwrap(), RoofSlope::Deg8);
        assert_eq!(parse_option("  ", MountType::Wall).unwrap(), MountType::Wall);
    }

    #[test]
    fn test_option_codes_accepted() {
        assert_eq!(parse_option("10\n", RoofSlope::Deg8).unwrap(), RoofSlope::Deg10);
        assert_eq!(parse_option("freestanding", MountType::Wall).unwrap(), MountType::Freestanding);
        assert_eq!(parse_option("3500", PostLength::Mm2500).unwrap(), PostLength::Mm3500);
        assert_eq!(parse_option("RAL9005st", FrameColor::MediumGrey).unwrap(), FrameColor::Black);
        for covering in RoofCovering::ALL {
            assert_eq!(parse_option(covering.code(), RoofCovering::default()).unwrap(), covering);
        }
        for option in SidePanelOption::ALL {
            assert_eq!(parse_option(option.code(), SidePanelOption::None).unwrap(), option);
        }
        for mounting in PostMounting::ALL {
            assert_eq!(parse_option(mounting.code(), PostMounting::default()).unwrap(), mounting);
        }
        for delivery in DeliveryOption::ALL {
            assert_eq!(parse_option(delivery.code(), DeliveryOption::default()).unwrap(), delivery);
        }
    }

    #[test]
    fn test_unknown_option_code_fails() {
        let err = parse_option("12", RoofSlope::Deg8).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_OPTION");
        let err = parse_option("tin-sheet", RoofCovering::default()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_OPTION");
    }
}
