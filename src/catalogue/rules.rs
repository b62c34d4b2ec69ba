//! The catalogue layout as data.
//!
//! Every element the converter can produce is described here, in output
//! order, as a tree of [`Node`]s. The interpreter in `assemble` walks these
//! tables once for the header and once per catalogue line; it has no
//! per-field logic of its own. Element order inside a block is the table
//! order, whatever subset of fields happens to be filled in.

use std::collections::BTreeSet;

use super::fields::*;
use super::{CERTIFICATE_QUALIFIER, CUSTOMIZATION_ID, GTIN_SCHEME, PROFILE_ID};
use crate::core::{CodeColumn, ListKind};

/// How the text of an element or attribute is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// The field's cell text.
    Field(&'static str),
    /// Fixed text.
    Const(&'static str),
    /// The field's text up to the first space (`2024-01-15 00:00:00` → `2024-01-15`).
    Date(&'static str),
    /// The field's text looked up in a code list.
    Code {
        field: &'static str,
        list: ListKind,
        column: CodeColumn,
    },
    /// A two-letter country code as written, anything longer looked up in the
    /// country list.
    Country(&'static str),
    /// `matched` when the field equals `token` (ignoring case), otherwise
    /// `otherwise`. Always yields text, even for a blank field.
    Flag {
        field: &'static str,
        token: &'static str,
        matched: &'static str,
        otherwise: &'static str,
    },
    /// The catalogue currency from the header.
    Currency,
}

impl Value {
    /// The template field this value reads, if any.
    pub fn field(&self) -> Option<&'static str> {
        match *self {
            Value::Field(f) | Value::Date(f) | Value::Country(f) => Some(f),
            Value::Code { field, .. } | Value::Flag { field, .. } => Some(field),
            Value::Const(_) | Value::Currency => None,
        }
    }
}

/// An attribute set on a [`Node::Leaf`] when both leaf and value are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attr {
    pub name: &'static str,
    pub value: Value,
}

/// Condition under which a [`Node::Group`] is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    Always,
    Present(&'static str),
    AnyPresent(&'static [&'static str]),
    /// The field equals the token, ignoring case.
    Equals(&'static str, &'static str),
    /// The value resolves to text. A filled cell whose lookup fails does not count.
    Resolves(Value),
}

impl When {
    fn collect_fields(&self, out: &mut BTreeSet<&'static str>) {
        match *self {
            When::Always => {}
            When::Present(f) | When::Equals(f, _) => {
                out.insert(f);
            }
            When::AnyPresent(fields) => out.extend(fields.iter().copied()),
            When::Resolves(value) => out.extend(value.field()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A text element, written when its value is present.
    Leaf {
        element: &'static str,
        value: Value,
        attrs: &'static [Attr],
    },
    /// A container, written when its condition holds.
    Group {
        element: &'static str,
        when: When,
        children: &'static [Node],
    },
    /// One `element` with a `cbc:ID` child per `;`-separated value of `field`.
    Split {
        element: &'static str,
        field: &'static str,
    },
}

impl Node {
    pub fn element(&self) -> &'static str {
        match *self {
            Node::Leaf { element, .. } | Node::Group { element, .. } | Node::Split { element, .. } => {
                element
            }
        }
    }
}

/// Every template field read anywhere below `nodes`.
pub fn referenced_fields(nodes: &[Node]) -> BTreeSet<&'static str> {
    let mut fields = BTreeSet::new();
    collect_fields(nodes, &mut fields);
    fields
}

fn collect_fields(nodes: &[Node], out: &mut BTreeSet<&'static str>) {
    for node in nodes {
        match node {
            Node::Leaf { value, attrs, .. } => {
                out.extend(value.field());
                out.extend(attrs.iter().filter_map(|a| a.value.field()));
            }
            Node::Group { when, children, .. } => {
                when.collect_fields(out);
                collect_fields(children, out);
            }
            Node::Split { field, .. } => {
                out.insert(*field);
            }
        }
    }
}

const fn code(field: &'static str, list: ListKind) -> Value {
    Value::Code {
        field,
        list,
        column: CodeColumn::Code,
    }
}

const fn unit(field: &'static str) -> Value {
    code(field, ListKind::Unit)
}

const fn attribute(field: &'static str, column: CodeColumn) -> Value {
    Value::Code {
        field,
        list: ListKind::ItemAttribute,
        column,
    }
}

macro_rules! leaf {
    ($element:expr, $value:expr) => {
        Node::Leaf {
            element: $element,
            value: $value,
            attrs: &[],
        }
    };
    ($element:expr, $value:expr, $($name:literal => $attr:expr),+ $(,)?) => {
        Node::Leaf {
            element: $element,
            value: $value,
            attrs: &[$(Attr { name: $name, value: $attr }),+],
        }
    };
}

macro_rules! group {
    ($element:expr, $when:expr, [$($child:expr),* $(,)?]) => {
        Node::Group {
            element: $element,
            when: $when,
            children: &[$($child),*],
        }
    };
}

/// `<element><cbc:ID>field</cbc:ID></element>`
macro_rules! reference {
    ($element:expr, $field:expr) => {
        group!($element, When::Present($field), [leaf!("cbc:ID", Value::Field($field))])
    };
}

macro_rules! period {
    ($element:expr, $start:expr, $end:expr) => {
        group!($element, When::AnyPresent(&[$start, $end]), [
            leaf!("cbc:StartDate", Value::Date($start)),
            leaf!("cbc:EndDate", Value::Date($end)),
        ])
    };
}

/// `PartyIdentification` is left out when its id is blank; an empty one fails UBL validation.
macro_rules! party_identification {
    ($endpoint:expr, $endpoint_scheme:expr, $id:expr, $id_scheme:expr) => {
        [
            leaf!("cbc:EndpointID", Value::Field($endpoint), "schemeID" => Value::Field($endpoint_scheme)),
            group!("cac:PartyIdentification", When::Present($id), [
                leaf!("cbc:ID", Value::Field($id), "schemeID" => Value::Field($id_scheme)),
            ]),
        ]
    };
}

/// One price block. The base price has no minimum quantity; tiers do.
macro_rules! price {
    ($amount:expr $(, $minimum:expr)?) => {
        group!("cac:RequiredItemLocationQuantity", When::Present($amount), [
            leaf!("cbc:LeadTimeMeasure", Value::Field(LEADTIMEMEASURE), "unitCode" => Value::Const("DAY")),
            $(leaf!("cbc:MinimumQuantity", Value::Field($minimum), "unitCode" => unit(BASEQUANTITY_CODE)),)?
            group!("cac:Price", When::Always, [
                leaf!("cbc:PriceAmount", Value::Field($amount), "currencyID" => Value::Currency),
                leaf!("cbc:BaseQuantity", Value::Field(BASEQUANTITY), "unitCode" => unit(BASEQUANTITY_CODE)),
                leaf!("cbc:PriceType", code(PRICETYPE, ListKind::PriceType)),
                period!("cac:ValidityPeriod", PRICE_STARTDATE, PRICE_ENDDATE),
            ]),
        ])
    };
}

macro_rules! property {
    (
        when: $when:expr,
        name: $name:expr,
        $(code: $code:expr, list: $list:expr,)?
        value: $value:expr
        $(, qualifier: $qualifier:expr)?
        $(,)?
    ) => {
        group!("cac:AdditionalItemProperty", When::Present($when), [
            leaf!("cbc:Name", $name),
            $(leaf!("cbc:NameCode", $code, "listID" => $list),)?
            leaf!("cbc:Value", $value),
            $(leaf!("cbc:ValueQualifier", $qualifier),)?
        ])
    };
}

/// A property whose name code, list id, value and qualifier all come from
/// the item attribute code list.
macro_rules! table_property {
    ($field:expr) => {
        property!(
            when: $field,
            name: Value::Field($field),
            code: attribute($field, CodeColumn::Code),
            list: attribute($field, CodeColumn::Attr1),
            value: attribute($field, CodeColumn::Attr2),
            qualifier: attribute($field, CodeColumn::Attr3),
        )
    };
}

macro_rules! certificate {
    ($field:expr, $list:expr, $kind:literal) => {
        group!("cac:Certificate", When::Resolves(code($field, $list)), [
            leaf!("cbc:ID", code($field, $list)),
            leaf!("cbc:CertificateTypeCode", Value::Const("NA")),
            leaf!("cbc:CertificateType", Value::Const($kind)),
            leaf!("cbc:Remarks", Value::Field($field)),
            group!("cac:IssuerParty", When::Always, [
                group!("cac:PartyName", When::Always, [leaf!("cbc:Name", Value::Const("NA"))]),
            ]),
            group!("cac:DocumentReference", When::Always, [
                leaf!("cbc:ID", Value::Const(CERTIFICATE_QUALIFIER)),
            ]),
        ])
    };
}

macro_rules! dimension {
    (range $id:literal, $min:expr, $max:expr, $unit:literal) => {
        group!("cac:Dimension", When::AnyPresent(&[$min, $max]), [
            leaf!("cbc:AttributeID", Value::Const($id)),
            leaf!("cbc:MinimumMeasure", Value::Field($min), "unitCode" => Value::Const($unit)),
            leaf!("cbc:MaximumMeasure", Value::Field($max), "unitCode" => Value::Const($unit)),
        ])
    };
    ($id:literal, $measure:expr, $uom:expr $(, $description:literal)?) => {
        group!("cac:Dimension", When::Present($measure), [
            leaf!("cbc:AttributeID", Value::Const($id)),
            leaf!("cbc:Measure", Value::Field($measure), "unitCode" => unit($uom)),
            $(leaf!("cbc:Description", Value::Const($description)),)?
        ])
    };
}

const PROVIDER_PARTY: [Node; 2] = party_identification!(
    PROVIDER_SUPPLIER_ENDPOINT_ID,
    PROVIDER_SUPPLIER_ENDPOINT_ID_SCHEMEID,
    PROVIDER_SUPPLIER_PARTY_ID,
    PROVIDER_SUPPLIER_PARTY_ID_SCHEMEID
);
const RECEIVER_PARTY: [Node; 2] = party_identification!(
    RECEIVER_BUYER_ENDPOINT_ID,
    RECEIVER_BUYER_ENDPOINT_ID_SCHEMEID,
    RECEIVER_BUYER_PARTY_ID,
    RECEIVER_BUYER_PARTY_ID_SCHEMEID
);
const SUPPLIER_PARTY: [Node; 2] = party_identification!(
    SUPPLIER_ENDPOINT_ID,
    SUPPLIER_ENDPOINT_ID_SCHEMEID,
    SUPPLIER_PARTY_ID,
    SUPPLIER_PARTY_ID_SCHEMEID
);
const BUYER_PARTY: [Node; 2] = party_identification!(
    BUYER_ENDPOINT_ID,
    BUYER_ENDPOINT_ID_SCHEMEID,
    BUYER_PARTY_ID,
    BUYER_PARTY_ID_SCHEMEID
);

/// Children of the `Catalogue` root before the lines. Fields are read from
/// the `CatalogueHeader` sheet.
pub const HEADER: &[Node] = &[
    leaf!("cbc:CustomizationID", Value::Const(CUSTOMIZATION_ID)),
    leaf!("cbc:ProfileID", Value::Const(PROFILE_ID)),
    leaf!("cbc:ID", Value::Field(CATALOGUE_ID)),
    leaf!("cbc:ActionCode", Value::Field(ACTIONCODE)),
    leaf!("cbc:Name", Value::Field(CATALOGUE_NAME)),
    leaf!("cbc:IssueDate", Value::Date(CATALOGUE_ISSUEDATE)),
    period!("cac:ValidityPeriod", CATALOGUE_STARTDATE, CATALOGUE_ENDDATE),
    reference!("cac:ReferencedContract", REFERENCED_CONTRACT_ID),
    reference!("cac:SourceCatalogueReference", PREVIOUS_CATALOGUE_ID),
    group!("cac:ProviderParty", When::Always, [
        PROVIDER_PARTY[0],
        PROVIDER_PARTY[1],
        group!("cac:PartyLegalEntity", When::Present(PROVIDER_SUPPLIER_NAME), [
            leaf!("cbc:RegistrationName", Value::Field(PROVIDER_SUPPLIER_NAME)),
        ]),
    ]),
    group!("cac:ReceiverParty", When::Always, [
        RECEIVER_PARTY[0],
        RECEIVER_PARTY[1],
        group!("cac:PartyLegalEntity", When::Present(RECEIVER_BUYER_NAME), [
            leaf!("cbc:RegistrationName", Value::Field(RECEIVER_BUYER_NAME)),
        ]),
    ]),
    group!("cac:SellerSupplierParty", When::Present(SUPPLIER_NAME), [
        group!("cac:Party", When::Always, [
            SUPPLIER_PARTY[0],
            SUPPLIER_PARTY[1],
            group!("cac:PartyName", When::Always, [leaf!("cbc:Name", Value::Field(SUPPLIER_NAME))]),
        ]),
    ]),
    group!("cac:ContractorCustomerParty", When::Present(BUYER_NAME), [
        group!("cac:Party", When::Always, [
            BUYER_PARTY[0],
            BUYER_PARTY[1],
            group!("cac:PartyName", When::Always, [leaf!("cbc:Name", Value::Field(BUYER_NAME))]),
        ]),
    ]),
];

/// Children of one `cac:CatalogueLine`. Fields are read from the line's row
/// on the `CatalogueLines` sheet.
pub const LINE: &[Node] = &[
    leaf!("cbc:ID", Value::Field(LINE_ID)),
    leaf!("cbc:ActionCode", Value::Const("Add")),
    leaf!(
        "cbc:OrderableIndicator",
        Value::Flag {
            field: ORDERABLEINDICATOR,
            token: "nej",
            matched: "false",
            otherwise: "true",
        }
    ),
    leaf!("cbc:OrderableUnit", unit(BASEQUANTITY_CODE)),
    leaf!("cbc:ContentUnitQuantity", Value::Field(CONTENTUNITQUANTITY), "unitCode" => unit(CONTENTUNITQUANTITY_CODE)),
    leaf!("cbc:OrderQuantityIncrementNumeric", Value::Field(ORDERQUANTITYINCREMENTNUMERIC)),
    leaf!("cbc:MinimumOrderQuantity", Value::Field(MINIMUMORDERQUANTITY), "unitCode" => unit(ORDERABLEUNIT)),
    leaf!("cbc:PackLevelCode", Value::Field(PACKLEVELCODE)),
    period!("cac:LineValidityPeriod", LINE_VALIDITY_STARTDATE, LINE_VALIDITY_ENDDATE),
    group!("cac:ItemComparison", When::AnyPresent(&[ITEMCOM_PRICEAMOUNT, ITEMCOM_QUANTITY]), [
        leaf!("cbc:PriceAmount", Value::Field(ITEMCOM_PRICEAMOUNT), "currencyID" => Value::Currency),
        leaf!("cbc:Quantity", Value::Field(ITEMCOM_QUANTITY), "unitCode" => unit(ITEMCOM_QUANTITY_CODE)),
    ]),
    group!("cac:ComponentRelatedItem", When::Present(COMPREL_ITEM_ID), [
        leaf!("cbc:ID", Value::Field(COMPREL_ITEM_ID)),
        leaf!("cbc:Quantity", Value::Field(COMPREL_ITEM_QUANTITY), "unitCode" => unit(COMPREL_ITEM_QUANTITY_CODE)),
    ]),
    Node::Split {
        element: "cac:ComponentRelatedItem",
        field: COMPREL2_ITEM_ID,
    },
    Node::Split {
        element: "cac:AccessoryRelatedItem",
        field: ASSOCREL_ITEM_ID,
    },
    Node::Split {
        element: "cac:RequiredRelatedItem",
        field: REQUIREDREL_ITEM_ID,
    },
    reference!("cac:ReplacedRelatedItem", REPLACEDREL_ITEM_ID),
    price!(PRICEAMOUNT),
    price!(PRICEAMOUNT_TIER1, MINIMUMQUANTITY_TIER1),
    price!(PRICEAMOUNT_TIER2, MINIMUMQUANTITY_TIER2),
    price!(PRICEAMOUNT_TIER3, MINIMUMQUANTITY_TIER3),
    price!(PRICEAMOUNT_TIER4, MINIMUMQUANTITY_TIER4),
    Node::Group {
        element: "cac:Item",
        when: When::Always,
        children: ITEM,
    },
];

/// Children of `cac:Item` inside a catalogue line.
pub const ITEM: &[Node] = &[
    leaf!("cbc:Description", Value::Field(ITEM_DESCRIPTION)),
    leaf!("cbc:PackQuantity", Value::Field(ITEM_PACKQUANTITY), "unitCode" => unit(ITEM_PACKQUANTITY_CODE)),
    leaf!("cbc:PackSizeNumeric", Value::Field(ITEM_PACKSIZENUMERIC)),
    leaf!("cbc:Name", Value::Field(ITEM_NAME)),
    leaf!("cbc:Keyword", Value::Field(ITEM_KEYWORD)),
    leaf!("cbc:BrandName", Value::Field(ITEM_BRANDNAME)),
    reference!("cac:SellersItemIdentification", SELLERSITEMIDENTIFICATION_ID),
    reference!("cac:ManufacturersItemIdentification", MANUFACTURERSITEMIDENTIFICATION_ID),
    group!("cac:StandardItemIdentification", When::Present(STANDARDITEMIDENTIFICATION_ID), [
        leaf!("cbc:ID", Value::Field(STANDARDITEMIDENTIFICATION_ID), "schemeID" => Value::Const(GTIN_SCHEME)),
    ]),
    group!("cac:ItemSpecificationDocumentReference", When::Present(ITEMSPECIFICATION_EXTERNAL_URI), [
        leaf!("cbc:ID", Value::Const("NA")),
        leaf!("cbc:DocumentTypeCode", Value::Const("TRADE_ITEM_DESCRIPTION")),
        group!("cac:Attachment", When::Always, [
            group!("cac:ExternalReference", When::Always, [
                leaf!("cbc:URI", Value::Field(ITEMSPECIFICATION_EXTERNAL_URI)),
            ]),
        ]),
    ]),
    group!("cac:ItemSpecificationDocumentReference", When::Present(ITEMSPECIFICATION_PRODUCT_IMAGE_URI), [
        leaf!("cbc:ID", Value::Const("NA")),
        leaf!("cbc:DocumentTypeCode", Value::Const("PRODUCT_IMAGE")),
        group!("cac:Attachment", When::Always, [
            group!("cac:ExternalReference", When::Always, [
                leaf!("cbc:URI", Value::Field(ITEMSPECIFICATION_PRODUCT_IMAGE_URI)),
            ]),
        ]),
    ]),
    group!("cac:OriginCountry", When::Present(ORIGIN_COUNTRY_CODE), [
        leaf!("cbc:IdentificationCode", Value::Country(ORIGIN_COUNTRY_CODE)),
    ]),
    group!("cac:CommodityClassification", When::Present(ITEMCLASSIFICATIONCODE_SSU), [
        leaf!(
            "cbc:ItemClassificationCode",
            Value::Field(ITEMCLASSIFICATIONCODE_SSU),
            "listID" => Value::Const("SSU"),
            "name" => Value::Field(ITEMCLASSIFICATION_VARUGRUPP_DESC),
        ),
    ]),
    group!("cac:CommodityClassification", When::Present(ITEMCLASSIFICATIONCODE_UNSPSC), [
        leaf!("cbc:ItemClassificationCode", Value::Field(ITEMCLASSIFICATIONCODE_UNSPSC), "listID" => Value::Const("TST")),
    ]),
    group!("cac:CommodityClassification", When::Present(ITEMCLASSIFICATIONCODE_STL), [
        leaf!("cbc:ItemClassificationCode", Value::Field(ITEMCLASSIFICATIONCODE_STL), "listID" => Value::Const("STL")),
    ]),
    group!("cac:CommodityClassification", When::Present(ITEMCLASSIFICATIONCODE_CC), [
        leaf!(
            "cbc:ItemClassificationCode",
            Value::Field(ITEMCLASSIFICATIONCODE_CC),
            "listID" => Value::Const("CC"),
            "listVersionID" => Value::Const("ISO-9999:2016"),
        ),
    ]),
    group!("cac:TransactionConditions", When::Equals(CONTRACTED_ITEM, "ja"), [
        leaf!("cbc:ActionCode", Value::Const("CT")),
    ]),
    group!("cac:HazardousItem", When::Present(HAZARDOUSITEM_CODE), [
        leaf!("cbc:UNDGCode", Value::Field(HAZARDOUSITEM_CODE)),
        leaf!("cbc:HazardClassID", Value::Field(HAZARDOUSITEM_CLASS_ID)),
    ]),
    // The raw tax category text doubles as the percentage.
    group!("cac:ClassifiedTaxCategory", When::Present(CLASSIFIEDTAXCATEGORY_CODE), [
        leaf!("cbc:ID", code(CLASSIFIEDTAXCATEGORY_CODE, ListKind::Vat)),
        leaf!("cbc:Percent", Value::Field(CLASSIFIEDTAXCATEGORY_CODE)),
        group!("cac:TaxScheme", When::Always, [leaf!("cbc:ID", Value::Const("VAT"))]),
    ]),
    property!(
        when: ADD_PROP_VARIABLE_Q,
        name: Value::Const("Variabelmåttvara"),
        code: Value::Const("VQ"),
        list: Value::Const("GS17009:SFTI"),
        value: Value::Flag {
            field: ADD_PROP_VARIABLE_Q,
            token: "ja",
            matched: "true",
            otherwise: "false",
        },
        qualifier: Value::Const("SFTI:T0186"),
    ),
    property!(
        when: ADD_PROP_AVAILABILITY,
        name: Value::Field(ADD_PROP_AVAILABILITY),
        code: code(ADD_PROP_AVAILABILITY, ListKind::Availability),
        list: Value::Const("GS14183:SFTI"),
        value: Value::Const("true"),
        qualifier: Value::Const("SFTI:T0014"),
    ),
    table_property!(ADD_PROP_1_TYPE_FROM_TABLE),
    table_property!(ADD_PROP_2_TYPE_FROM_TABLE),
    table_property!(ADD_PROP_3_TYPE_FROM_TABLE),
    table_property!(ADD_PROP_4_TYPE_FROM_TABLE),
    table_property!(ADD_PROP_5_TYPE_FROM_TABLE),
    property!(
        when: ADD_PROP_1_NAME,
        name: Value::Field(ADD_PROP_1_NAME),
        value: Value::Field(ADD_PROP_1_VALUE),
        qualifier: code(ADD_PROP_1_NAME, ListKind::ItemProperty),
    ),
    property!(
        when: ADD_PROP_2_NAME,
        name: Value::Field(ADD_PROP_2_NAME),
        value: Value::Field(ADD_PROP_2_VALUE),
        qualifier: code(ADD_PROP_2_NAME, ListKind::ItemProperty),
    ),
    property!(
        when: ADD_PROP_3_NAME,
        name: Value::Field(ADD_PROP_3_NAME),
        value: Value::Field(ADD_PROP_3_VALUE),
        qualifier: code(ADD_PROP_3_NAME, ListKind::ItemProperty),
    ),
    property!(
        when: ADD_PROP_1_USERTEXT_NAME,
        name: Value::Field(ADD_PROP_1_USERTEXT_NAME),
        value: Value::Field(ADD_PROP_1_USERTEXT_VALUE),
    ),
    group!("cac:ManufacturerParty", When::Present(MANUFACTURERPARTY_NAME), [
        group!("cac:PartyName", When::Always, [leaf!("cbc:Name", Value::Field(MANUFACTURERPARTY_NAME))]),
    ]),
    certificate!(CERTIFICATE_ENV_1, ListKind::CertificateEnvironmental, "Environmental"),
    certificate!(CERTIFICATE_ENV_2, ListKind::CertificateEnvironmental, "Environmental"),
    certificate!(CERTIFICATE_ENV_3, ListKind::CertificateEnvironmental, "Environmental"),
    certificate!(CERTIFICATE_ENV_4, ListKind::CertificateEnvironmental, "Environmental"),
    certificate!(CERTIFICATE_ENV_5, ListKind::CertificateEnvironmental, "Environmental"),
    certificate!(CERTIFICATE_NUTR_1, ListKind::CertificateNutrition, "Nutrition"),
    certificate!(CERTIFICATE_NUTR_2, ListKind::CertificateNutrition, "Nutrition"),
    certificate!(CERTIFICATE_NUTR_3, ListKind::CertificateNutrition, "Nutrition"),
    certificate!(CERTIFICATE_NUTR_4, ListKind::CertificateNutrition, "Nutrition"),
    certificate!(CERTIFICATE_NUTR_5, ListKind::CertificateNutrition, "Nutrition"),
    dimension!("LN", DIMENSION_ATTR_LN_MEASURE, DIMENSION_ATTR_LN_MEASURE_UOM),
    dimension!("WD", DIMENSION_ATTR_WD_MEASURE, DIMENSION_ATTR_WD_MEASURE_UOM),
    dimension!("HT", DIMENSION_ATTR_HT_MEASURE, DIMENSION_ATTR_HT_MEASURE_UOM),
    dimension!("GW", DIMENSION_ATTR_GW_MEASURE, DIMENSION_ATTR_GW_MEASURE_UOM),
    dimension!("ABJ", DIMENSION_ATTR_ABJ_MEASURE, DIMENSION_ATTR_ABJ_MEASURE_UOM),
    dimension!("AAF", DIMENSION_ATTR_AAF_MEASURE, DIMENSION_ATTR_AAF_MEASURE_UOM),
    dimension!(
        "AAF",
        DIMENSION_ATTR_APPROX_AAF_MEASURE,
        DIMENSION_ATTR_APPROX_AAF_MEASURE_UOM,
        "Approximate net weight"
    ),
    dimension!("AAX", DIMENSION_ATTR_AAX_MEASURE, DIMENSION_ATTR_AAX_MEASURE_UOM),
    dimension!(range "TC", DIMENSION_ATTR_TC_MIN_MEASURE, DIMENSION_ATTR_TC_MAX_MEASURE, "CEL"),
    dimension!(range "AAO", DIMENSION_ATTR_AAO_MIN_MEASURE, DIMENSION_ATTR_AAO_MAX_MEASURE, "P1"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TemplateConfig;

    fn count(nodes: &[Node], element: &str) -> usize {
        nodes.iter().filter(|n| n.element() == element).count()
    }

    fn child<'a>(nodes: &'a [Node], element: &str) -> &'a [Node] {
        nodes
            .iter()
            .find_map(|n| match n {
                Node::Group { element: e, children, .. } if *e == element => Some(*children),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn bundled_config_covers_every_field() {
        let config = TemplateConfig::bundled().unwrap();
        for field in referenced_fields(HEADER) {
            assert!(config.header_cell(field).is_ok(), "header field {field}");
        }
        for field in referenced_fields(LINE) {
            assert!(config.line_column(field).is_ok(), "line field {field}");
        }
    }

    #[test]
    fn bundled_config_has_no_unused_fields() {
        let config = TemplateConfig::bundled().unwrap();
        let mut header = referenced_fields(HEADER);
        header.insert(CURRENCY_ID);
        let lines = referenced_fields(LINE);
        for name in config.header_cells.keys() {
            assert!(header.contains(name.as_str()), "unused header field {name}");
        }
        for name in config.line_columns.keys() {
            assert!(lines.contains(name.as_str()), "unused line field {name}");
        }
    }

    #[test]
    fn line_has_five_price_blocks() {
        assert_eq!(count(LINE, "cac:RequiredItemLocationQuantity"), 5);
    }

    #[test]
    fn item_repeats() {
        assert_eq!(count(ITEM, "cac:Certificate"), 10);
        assert_eq!(count(ITEM, "cac:Dimension"), 10);
        assert_eq!(count(ITEM, "cac:AdditionalItemProperty"), 11);
        assert_eq!(count(ITEM, "cac:CommodityClassification"), 4);
        assert_eq!(count(ITEM, "cac:ItemSpecificationDocumentReference"), 2);
    }

    #[test]
    fn only_tiers_carry_a_minimum_quantity() {
        let prices: Vec<&Node> = LINE
            .iter()
            .filter(|n| n.element() == "cac:RequiredItemLocationQuantity")
            .collect();
        for (i, price) in prices.iter().enumerate() {
            let Node::Group { children, .. } = price else {
                panic!("price block is not a group");
            };
            assert_eq!(count(children, "cbc:MinimumQuantity"), usize::from(i > 0));
            assert_eq!(count(children, "cac:Price"), 1);
        }
    }

    #[test]
    fn table_properties_read_all_attribute_columns() {
        let properties: Vec<&Node> = ITEM
            .iter()
            .filter(|n| {
                matches!(n, Node::Group { when: When::Present(f), .. } if f.ends_with("_TYPE_FROM_TABLE"))
            })
            .collect();
        assert_eq!(properties.len(), 5);
        for property in properties {
            let Node::Group { children, .. } = property else {
                unreachable!()
            };
            let columns: Vec<CodeColumn> = children
                .iter()
                .flat_map(|n| match n {
                    Node::Leaf { value, attrs, .. } => {
                        std::iter::once(*value).chain(attrs.iter().map(|a| a.value)).collect()
                    }
                    _ => Vec::new(),
                })
                .filter_map(|v| match v {
                    Value::Code {
                        list: ListKind::ItemAttribute,
                        column,
                        ..
                    } => Some(column),
                    _ => None,
                })
                .collect();
            assert_eq!(
                columns,
                [CodeColumn::Code, CodeColumn::Attr1, CodeColumn::Attr2, CodeColumn::Attr3]
            );
        }
    }

    #[test]
    fn certificates_need_a_known_label() {
        let certificates: Vec<&Node> =
            ITEM.iter().filter(|n| n.element() == "cac:Certificate").collect();
        assert_eq!(certificates.len(), 10);
        for certificate in certificates {
            assert!(matches!(
                certificate,
                Node::Group {
                    when: When::Resolves(Value::Code { column: CodeColumn::Code, .. }),
                    ..
                }
            ));
        }
    }

    #[test]
    fn item_is_last_in_line() {
        assert_eq!(LINE.last().map(Node::element), Some("cac:Item"));
    }

    #[test]
    fn standard_item_identification_is_gtin() {
        let children = child(ITEM, "cac:StandardItemIdentification");
        let Node::Leaf { attrs, .. } = children[0] else {
            panic!("expected leaf");
        };
        assert_eq!(attrs[0].name, "schemeID");
        assert_eq!(attrs[0].value, Value::Const("0160"));
    }
}
