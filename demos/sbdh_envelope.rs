//! Convert a catalogue and wrap it in an SBDH envelope for an access point.
//!
//! ```text
//! cargo run --example sbdh_envelope -- catalogue.xlsx 0007:5560000001 0007:2120000001 SE
//! ```

use katalog::catalogue::ConvertOptions;
use katalog::sbdh::{Envelope, Participant, to_sbdh_xml};
use katalog::{TemplateConfig, Workbook};

fn participant(arg: &str) -> Participant {
    match arg.split_once(':') {
        Some((scheme, id)) => Participant::new(scheme, id),
        None => Participant::new("0007", arg),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, sender, receiver, country] = args.as_slice() else {
        eprintln!("usage: sbdh_envelope <workbook> <scheme:sender> <scheme:receiver> <country>");
        std::process::exit(2);
    };

    let workbook = Workbook::open(input)?;
    let config = TemplateConfig::bundled()?;
    let envelope = Envelope::new(participant(sender), participant(receiver), country.as_str());
    let xml = to_sbdh_xml(&workbook, &config, &ConvertOptions::default(), &envelope)?;

    eprintln!("SBDH instance {}", envelope.instance_id);
    println!("{xml}");
    Ok(())
}
