//! Names of the configured template fields.
//!
//! Header names are keys of the `[HeaderCell]` table, line names keys of the
//! `[LineColIndex]` table.

// Catalogue header
pub const CATALOGUE_ID: &str = "CATALOGUE_ID";
pub const ACTIONCODE: &str = "ACTIONCODE";
pub const CATALOGUE_NAME: &str = "CATALOGUE_NAME";
pub const CATALOGUE_ISSUEDATE: &str = "CATALOGUE_ISSUEDATE";
pub const CURRENCY_ID: &str = "CURRENCY_ID";
pub const CATALOGUE_STARTDATE: &str = "CATALOGUE_STARTDATE";
pub const CATALOGUE_ENDDATE: &str = "CATALOGUE_ENDDATE";
pub const REFERENCED_CONTRACT_ID: &str = "REFERENCED_CONTRACT_ID";
pub const PREVIOUS_CATALOGUE_ID: &str = "PREVIOUS_CATALOGUE_ID";

pub const PROVIDER_SUPPLIER_ENDPOINT_ID: &str = "PROVIDER_SUPPLIER_ENDPOINT_ID";
pub const PROVIDER_SUPPLIER_ENDPOINT_ID_SCHEMEID: &str = "PROVIDER_SUPPLIER_ENDPOINT_ID_SCHEMEID";
pub const PROVIDER_SUPPLIER_PARTY_ID: &str = "PROVIDER_SUPPLIER_PARTY_ID";
pub const PROVIDER_SUPPLIER_PARTY_ID_SCHEMEID: &str = "PROVIDER_SUPPLIER_PARTY_ID_SCHEMEID";
pub const PROVIDER_SUPPLIER_NAME: &str = "PROVIDER_SUPPLIER_NAME";

pub const RECEIVER_BUYER_ENDPOINT_ID: &str = "RECEIVER_BUYER_ENDPOINT_ID";
pub const RECEIVER_BUYER_ENDPOINT_ID_SCHEMEID: &str = "RECEIVER_BUYER_ENDPOINT_ID_SCHEMEID";
pub const RECEIVER_BUYER_PARTY_ID: &str = "RECEIVER_BUYER_PARTY_ID";
pub const RECEIVER_BUYER_PARTY_ID_SCHEMEID: &str = "RECEIVER_BUYER_PARTY_ID_SCHEMEID";
pub const RECEIVER_BUYER_NAME: &str = "RECEIVER_BUYER_NAME";

pub const SUPPLIER_ENDPOINT_ID: &str = "SUPPLIER_ENDPOINT_ID";
pub const SUPPLIER_ENDPOINT_ID_SCHEMEID: &str = "SUPPLIER_ENDPOINT_ID_SCHEMEID";
pub const SUPPLIER_PARTY_ID: &str = "SUPPLIER_PARTY_ID";
pub const SUPPLIER_PARTY_ID_SCHEMEID: &str = "SUPPLIER_PARTY_ID_SCHEMEID";
pub const SUPPLIER_NAME: &str = "SUPPLIER_NAME";

pub const BUYER_ENDPOINT_ID: &str = "BUYER_ENDPOINT_ID";
pub const BUYER_ENDPOINT_ID_SCHEMEID: &str = "BUYER_ENDPOINT_ID_SCHEMEID";
pub const BUYER_PARTY_ID: &str = "BUYER_PARTY_ID";
pub const BUYER_PARTY_ID_SCHEMEID: &str = "BUYER_PARTY_ID_SCHEMEID";
pub const BUYER_NAME: &str = "BUYER_NAME";

// Catalogue line
pub const LINE_ID: &str = "LINE_ID";
pub const ORDERABLEINDICATOR: &str = "ORDERABLEINDICATOR";
pub const ORDERABLEUNIT: &str = "ORDERABLEUNIT";
pub const CONTENTUNITQUANTITY: &str = "CONTENTUNITQUANTITY";
pub const CONTENTUNITQUANTITY_CODE: &str = "CONTENTUNITQUANTITY_CODE";
pub const ORDERQUANTITYINCREMENTNUMERIC: &str = "ORDERQUANTITYINCREMENTNUMERIC";
pub const MINIMUMORDERQUANTITY: &str = "MINIMUMORDERQUANTITY";
pub const PACKLEVELCODE: &str = "PACKLEVELCODE";
pub const LINE_VALIDITY_STARTDATE: &str = "LINE_VALIDITY_STARTDATE";
pub const LINE_VALIDITY_ENDDATE: &str = "LINE_VALIDITY_ENDDATE";

pub const ITEMCOM_PRICEAMOUNT: &str = "ITEMCOM_PRICEAMOUNT";
pub const ITEMCOM_QUANTITY: &str = "ITEMCOM_QUANTITY";
pub const ITEMCOM_QUANTITY_CODE: &str = "ITEMCOM_QUANTITY_CODE";

pub const COMPREL_ITEM_ID: &str = "COMPREL_ITEM_ID";
pub const COMPREL_ITEM_QUANTITY: &str = "COMPREL_ITEM_QUANTITY";
pub const COMPREL_ITEM_QUANTITY_CODE: &str = "COMPREL_ITEM_QUANTITY_CODE";
pub const COMPREL2_ITEM_ID: &str = "COMPREL2_ITEM_ID";
pub const ASSOCREL_ITEM_ID: &str = "ASSOCREL_ITEM_ID";
pub const REQUIREDREL_ITEM_ID: &str = "REQUIREDREL_ITEM_ID";
pub const REPLACEDREL_ITEM_ID: &str = "REPLACEDREL_ITEM_ID";

pub const PRICEAMOUNT: &str = "PRICEAMOUNT";
pub const BASEQUANTITY: &str = "BASEQUANTITY";
pub const BASEQUANTITY_CODE: &str = "BASEQUANTITY_CODE";
pub const PRICETYPE: &str = "PRICETYPE";
pub const PRICE_STARTDATE: &str = "PRICE_STARTDATE";
pub const PRICE_ENDDATE: &str = "PRICE_ENDDATE";
pub const LEADTIMEMEASURE: &str = "LEADTIMEMEASURE";
pub const MINIMUMQUANTITY_TIER1: &str = "MINIMUMQUANTITY_TIER1";
pub const PRICEAMOUNT_TIER1: &str = "PRICEAMOUNT_TIER1";
pub const MINIMUMQUANTITY_TIER2: &str = "MINIMUMQUANTITY_TIER2";
pub const PRICEAMOUNT_TIER2: &str = "PRICEAMOUNT_TIER2";
pub const MINIMUMQUANTITY_TIER3: &str = "MINIMUMQUANTITY_TIER3";
pub const PRICEAMOUNT_TIER3: &str = "PRICEAMOUNT_TIER3";
pub const MINIMUMQUANTITY_TIER4: &str = "MINIMUMQUANTITY_TIER4";
pub const PRICEAMOUNT_TIER4: &str = "PRICEAMOUNT_TIER4";

pub const ITEM_DESCRIPTION: &str = "ITEM_DESCRIPTION";
pub const ITEM_PACKQUANTITY: &str = "ITEM_PACKQUANTITY";
pub const ITEM_PACKQUANTITY_CODE: &str = "ITEM_PACKQUANTITY_CODE";
pub const ITEM_PACKSIZENUMERIC: &str = "ITEM_PACKSIZENUMERIC";
pub const ITEM_NAME: &str = "ITEM_NAME";
pub const ITEM_KEYWORD: &str = "ITEM_KEYWORD";
pub const ITEM_BRANDNAME: &str = "ITEM_BRANDNAME";
pub const SELLERSITEMIDENTIFICATION_ID: &str = "SELLERSITEMIDENTIFICATION_ID";
pub const MANUFACTURERSITEMIDENTIFICATION_ID: &str = "MANUFACTURERSITEMIDENTIFICATION_ID";
pub const STANDARDITEMIDENTIFICATION_ID: &str = "STANDARDITEMIDENTIFICATION_ID";
pub const ITEMSPECIFICATION_EXTERNAL_URI: &str = "ITEMSPECIFICATION_EXTERNAL_URI";
pub const ITEMSPECIFICATION_PRODUCT_IMAGE_URI: &str = "ITEMSPECIFICATION_PRODUCT_IMAGE_URI";
pub const ORIGIN_COUNTRY_CODE: &str = "ORIGIN_COUNTRY_CODE";

pub const ITEMCLASSIFICATIONCODE_SSU: &str = "ITEMCLASSIFICATIONCODE_SSU";
pub const ITEMCLASSIFICATION_VARUGRUPP_DESC: &str = "ITEMCLASSIFICATION_VARUGRUPP_DESC";
pub const ITEMCLASSIFICATIONCODE_UNSPSC: &str = "ITEMCLASSIFICATIONCODE_UNSPSC";
pub const ITEMCLASSIFICATIONCODE_STL: &str = "ITEMCLASSIFICATIONCODE_STL";
pub const ITEMCLASSIFICATIONCODE_CC: &str = "ITEMCLASSIFICATIONCODE_CC";

pub const CONTRACTED_ITEM: &str = "CONTRACTED_ITEM";
pub const HAZARDOUSITEM_CODE: &str = "HAZARDOUSITEM_CODE";
pub const HAZARDOUSITEM_CLASS_ID: &str = "HAZARDOUSITEM_CLASS_ID";
pub const CLASSIFIEDTAXCATEGORY_CODE: &str = "CLASSIFIEDTAXCATEGORY_CODE";

pub const ADD_PROP_VARIABLE_Q: &str = "ADD_PROP_VARIABLE_Q";
pub const ADD_PROP_AVAILABILITY: &str = "ADD_PROP_AVAILABILITY";
pub const ADD_PROP_1_TYPE_FROM_TABLE: &str = "ADD_PROP_1_TYPE_FROM_TABLE";
pub const ADD_PROP_2_TYPE_FROM_TABLE: &str = "ADD_PROP_2_TYPE_FROM_TABLE";
pub const ADD_PROP_3_TYPE_FROM_TABLE: &str = "ADD_PROP_3_TYPE_FROM_TABLE";
pub const ADD_PROP_4_TYPE_FROM_TABLE: &str = "ADD_PROP_4_TYPE_FROM_TABLE";
pub const ADD_PROP_5_TYPE_FROM_TABLE: &str = "ADD_PROP_5_TYPE_FROM_TABLE";
pub const ADD_PROP_1_NAME: &str = "ADD_PROP_1_NAME";
pub const ADD_PROP_1_VALUE: &str = "ADD_PROP_1_VALUE";
pub const ADD_PROP_2_NAME: &str = "ADD_PROP_2_NAME";
pub const ADD_PROP_2_VALUE: &str = "ADD_PROP_2_VALUE";
pub const ADD_PROP_3_NAME: &str = "ADD_PROP_3_NAME";
pub const ADD_PROP_3_VALUE: &str = "ADD_PROP_3_VALUE";
pub const ADD_PROP_1_USERTEXT_NAME: &str = "ADD_PROP_1_USERTEXT_NAME";
pub const ADD_PROP_1_USERTEXT_VALUE: &str = "ADD_PROP_1_USERTEXT_VALUE";
pub const MANUFACTURERPARTY_NAME: &str = "MANUFACTURERPARTY_NAME";

pub const CERTIFICATE_ENV_1: &str = "CERTIFICATE_ENV_1";
pub const CERTIFICATE_ENV_2: &str = "CERTIFICATE_ENV_2";
pub const CERTIFICATE_ENV_3: &str = "CERTIFICATE_ENV_3";
pub const CERTIFICATE_ENV_4: &str = "CERTIFICATE_ENV_4";
pub const CERTIFICATE_ENV_5: &str = "CERTIFICATE_ENV_5";
pub const CERTIFICATE_NUTR_1: &str = "CERTIFICATE_NUTR_1";
pub const CERTIFICATE_NUTR_2: &str = "CERTIFICATE_NUTR_2";
pub const CERTIFICATE_NUTR_3: &str = "CERTIFICATE_NUTR_3";
pub const CERTIFICATE_NUTR_4: &str = "CERTIFICATE_NUTR_4";
pub const CERTIFICATE_NUTR_5: &str = "CERTIFICATE_NUTR_5";

pub const DIMENSION_ATTR_LN_MEASURE: &str = "DIMENSION_ATTR_LN_MEASURE";
pub const DIMENSION_ATTR_LN_MEASURE_UOM: &str = "DIMENSION_ATTR_LN_MEASURE_UOM";
pub const DIMENSION_ATTR_WD_MEASURE: &str = "DIMENSION_ATTR_WD_MEASURE";
pub const DIMENSION_ATTR_WD_MEASURE_UOM: &str = "DIMENSION_ATTR_WD_MEASURE_UOM";
pub const DIMENSION_ATTR_HT_MEASURE: &str = "DIMENSION_ATTR_HT_MEASURE";
pub const DIMENSION_ATTR_HT_MEASURE_UOM: &str = "DIMENSION_ATTR_HT_MEASURE_UOM";
pub const DIMENSION_ATTR_GW_MEASURE: &str = "DIMENSION_ATTR_GW_MEASURE";
pub const DIMENSION_ATTR_GW_MEASURE_UOM: &str = "DIMENSION_ATTR_GW_MEASURE_UOM";
pub const DIMENSION_ATTR_ABJ_MEASURE: &str = "DIMENSION_ATTR_ABJ_MEASURE";
pub const DIMENSION_ATTR_ABJ_MEASURE_UOM: &str = "DIMENSION_ATTR_ABJ_MEASURE_UOM";
pub const DIMENSION_ATTR_AAF_MEASURE: &str = "DIMENSION_ATTR_AAF_MEASURE";
pub const DIMENSION_ATTR_AAF_MEASURE_UOM: &str = "DIMENSION_ATTR_AAF_MEASURE_UOM";
pub const DIMENSION_ATTR_APPROX_AAF_MEASURE: &str = "DIMENSION_ATTR_APPROX_AAF_MEASURE";
pub const DIMENSION_ATTR_APPROX_AAF_MEASURE_UOM: &str = "DIMENSION_ATTR_APPROX_AAF_MEASURE_UOM";
pub const DIMENSION_ATTR_AAX_MEASURE: &str = "DIMENSION_ATTR_AAX_MEASURE";
pub const DIMENSION_ATTR_AAX_MEASURE_UOM: &str = "DIMENSION_ATTR_AAX_MEASURE_UOM";
pub const DIMENSION_ATTR_TC_MIN_MEASURE: &str = "DIMENSION_ATTR_TC_MIN_MEASURE";
pub const DIMENSION_ATTR_TC_MAX_MEASURE: &str = "DIMENSION_ATTR_TC_MAX_MEASURE";
pub const DIMENSION_ATTR_AAO_MIN_MEASURE: &str = "DIMENSION_ATTR_AAO_MIN_MEASURE";
pub const DIMENSION_ATTR_AAO_MAX_MEASURE: &str = "DIMENSION_ATTR_AAO_MAX_MEASURE";
