//! Standard Business Document Header envelope for Peppol transport.
//!
//! Access points expect the catalogue wrapped in a `StandardBusinessDocument`
//! that names sender, receiver, document type and process.
//!
//! ```no_run
//! use katalog::catalogue::ConvertOptions;
//! use katalog::sbdh::{Envelope, Participant, to_sbdh_xml};
//! use katalog::{TemplateConfig, Workbook};
//!
//! let workbook = Workbook::open("catalogue.xlsx")?;
//! let envelope = Envelope::new(
//!     Participant::new("0007", "5560000001"),
//!     Participant::new("0007", "2120000001"),
//!     "SE",
//! );
//! let xml = to_sbdh_xml(&workbook, &TemplateConfig::bundled()?, &ConvertOptions::default(), &envelope)?;
//! # Ok::<(), katalog::KatalogError>(())
//! ```

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::catalogue::xml_utils::XmlWriter;
use crate::catalogue::{ConvertOptions, CUSTOMIZATION_ID, PROFILE_ID, ns, write_catalogue};
use crate::core::{Result, TemplateConfig, Workbook};

pub const SBDH_NAMESPACE: &str =
    "http://www.unece.org/cefact/namespaces/StandardBusinessDocumentHeader";

/// Authority of Peppol participant identifiers.
pub const PARTICIPANT_AUTHORITY: &str = "iso6523-actorid-upis";

/// Peppol document type identifier of a Catalogue 3 document.
pub fn document_type_id() -> String {
    format!("{}::Catalogue##{CUSTOMIZATION_ID}::2.1", ns::CATALOGUE)
}

/// A Peppol participant: an ICD scheme and the identifier within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub scheme: String,
    pub id: String,
}

impl Participant {
    pub fn new(scheme: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            id: id.into(),
        }
    }

    /// `scheme:id`
    pub fn identifier(&self) -> String {
        format!("{}:{}", self.scheme, self.id)
    }
}

/// Routing data written into the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub sender: Participant,
    pub receiver: Participant,
    /// Country of the sender (`COUNTRY_C1` scope).
    pub sender_country: String,
    pub instance_id: String,
    pub created: DateTime<Utc>,
}

impl Envelope {
    /// New envelope with a random instance id, created now.
    pub fn new(sender: Participant, receiver: Participant, sender_country: impl Into<String>) -> Self {
        Self::with_instance(
            sender,
            receiver,
            sender_country,
            Uuid::new_v4().to_string(),
            Utc::now(),
        )
    }

    /// Envelope with a fixed instance id and creation time.
    pub fn with_instance(
        sender: Participant,
        receiver: Participant,
        sender_country: impl Into<String>,
        instance_id: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            sender,
            receiver,
            sender_country: sender_country.into(),
            instance_id: instance_id.into(),
            created,
        }
    }

    fn write_header(&self, w: &mut XmlWriter) -> Result<()> {
        w.start_element("StandardBusinessDocumentHeader")?;
        w.text_element("HeaderVersion", "1.0")?;

        for (element, participant) in [("Sender", &self.sender), ("Receiver", &self.receiver)] {
            w.start_element(element)?;
            w.text_element_with_attrs(
                "Identifier",
                &participant.identifier(),
                &[("Authority", PARTICIPANT_AUTHORITY)],
            )?;
            w.end_element(element)?;
        }

        w.start_element("DocumentIdentification")?;
        w.text_element("Standard", ns::CATALOGUE)?;
        w.text_element("TypeVersion", "2.1")?;
        w.text_element("InstanceIdentifier", &self.instance_id)?;
        w.text_element("Type", "Catalogue")?;
        w.text_element(
            "CreationDateAndTime",
            &self.created.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        )?;
        w.end_element("DocumentIdentification")?;

        w.start_element("BusinessScope")?;
        let document_type = document_type_id();
        let scopes = [
            ("DOCUMENTID", document_type.as_str(), Some("busdox-docid-qns")),
            ("PROCESSID", PROFILE_ID, Some("cenbii-procid-ubl")),
            ("COUNTRY_C1", self.sender_country.as_str(), None),
        ];
        for (kind, instance, identifier) in scopes {
            w.start_element("Scope")?;
            w.text_element("Type", kind)?;
            w.text_element("InstanceIdentifier", instance)?;
            w.optional_element("Identifier", identifier, &[])?;
            w.end_element("Scope")?;
        }
        w.end_element("BusinessScope")?;

        w.end_element("StandardBusinessDocumentHeader")?;
        Ok(())
    }
}

/// Convert `workbook` and wrap the catalogue in an SBDH envelope.
pub fn to_sbdh_xml(
    workbook: &Workbook,
    config: &TemplateConfig,
    options: &ConvertOptions,
    envelope: &Envelope,
) -> Result<String> {
    debug!(instance = %envelope.instance_id, "writing SBDH envelope");
    let mut w = XmlWriter::new()?;
    w.start_element_with_attrs("StandardBusinessDocument", &[("xmlns", SBDH_NAMESPACE)])?;
    envelope.write_header(&mut w)?;
    write_catalogue(&mut w, workbook, config, options)?;
    w.end_element("StandardBusinessDocument")?;
    w.into_string()
}
