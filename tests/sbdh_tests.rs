#![cfg(feature = "sbdh")]

mod common;

use chrono::{TimeZone, Utc};
use common::Fixture;
use katalog::catalogue::{ConvertOptions, to_catalogue_xml};
use katalog::sbdh::{Envelope, Participant, to_sbdh_xml};
use katalog::*;

fn envelope() -> Envelope {
    Envelope::with_instance(
        Participant::new("0007", "5560000001"),
        Participant::new("0007", "2120000001"),
        "SE",
        "4f1c2b3a-0000-4000-8000-000000000001",
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    )
}

#[test]
fn envelope_wraps_the_catalogue() {
    let fixture = Fixture::new().simple_line("1");
    let xml = to_sbdh_xml(
        &fixture.workbook(),
        &fixture.config,
        &ConvertOptions::default(),
        &envelope(),
    )
    .unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(
        "<StandardBusinessDocument xmlns=\"http://www.unece.org/cefact/namespaces/StandardBusinessDocumentHeader\">"
    ));
    let header_end = xml.find("</StandardBusinessDocumentHeader>").unwrap();
    let catalogue = xml.find("<Catalogue ").unwrap();
    assert!(header_end < catalogue);
    assert!(xml.trim_end().ends_with("</StandardBusinessDocument>"));
    assert!(xml.contains("<cbc:ID>CAT-1</cbc:ID>"));
    assert_eq!(xml.matches("<cac:CatalogueLine>").count(), 1);
}

#[test]
fn header_carries_routing_data() {
    let fixture = Fixture::new();
    let xml = to_sbdh_xml(
        &fixture.workbook(),
        &fixture.config,
        &ConvertOptions::default(),
        &envelope(),
    )
    .unwrap();

    assert!(xml.contains("<HeaderVersion>1.0</HeaderVersion>"));
    assert!(xml.contains("<Standard>urn:oasis:names:specification:ubl:schema:xsd:Catalogue-2</Standard>"));
    assert!(xml.contains("<TypeVersion>2.1</TypeVersion>"));
    assert!(xml.contains("<Type>Catalogue</Type>"));
    assert!(xml.contains("<CreationDateAndTime>2024-01-15T12:00:00Z</CreationDateAndTime>"));
    assert!(xml.contains("<InstanceIdentifier>urn:fdc:peppol.eu:poacc:bis:catalogue_wo_response:3</InstanceIdentifier>"));
    assert!(xml.contains("<Identifier>busdox-docid-qns</Identifier>"));
    assert!(xml.contains("<Type>COUNTRY_C1</Type>"));
}

#[test]
fn fixed_envelope_is_deterministic() {
    let fixture = Fixture::new().simple_line("1").simple_line("2");
    let options = ConvertOptions::default();
    let first = to_sbdh_xml(&fixture.workbook(), &fixture.config, &options, &envelope()).unwrap();
    let second = to_sbdh_xml(&fixture.workbook(), &fixture.config, &options, &envelope()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn catalogue_body_matches_plain_conversion() {
    let fixture = Fixture::new().simple_line("1");
    let options = ConvertOptions::default();
    let plain = to_catalogue_xml(&fixture.workbook(), &fixture.config, &options).unwrap();
    let wrapped = to_sbdh_xml(&fixture.workbook(), &fixture.config, &options, &envelope()).unwrap();
    for tag in ["<cbc:CustomizationID>", "<cbc:Name>Pennor</cbc:Name>", "currencyID=\"SEK\""] {
        assert_eq!(plain.contains(tag), wrapped.contains(tag), "{tag}");
    }
}

#[test]
fn template_errors_produce_no_envelope() {
    let fixture = Fixture::new().without_sheet(LINES_SHEET);
    let err = to_sbdh_xml(
        &fixture.workbook(),
        &fixture.config,
        &ConvertOptions::default(),
        &envelope(),
    )
    .unwrap_err();
    assert!(matches!(err, KatalogError::TemplateShape(_)));
}
