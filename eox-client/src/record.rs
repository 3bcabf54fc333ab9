// SPDX-License-Identifier: MPL-2.0

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct EoxDate {
    #[serde(default)]
    pub value: String,
    #[serde(rename = "dateFormat", default)]
    pub date_format: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct MigrationDetails {
    #[serde(rename = "MigrationProductId", default)]
    pub migration_product_id: String,
}

/// Error object the API embeds in a record it could not resolve.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct EoxError {
    #[serde(rename = "ErrorID", default)]
    pub error_id: String,
    #[serde(rename = "ErrorDescription", default)]
    pub error_description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct EoxRecord {
    #[serde(rename = "EOLProductID")]
    pub eol_product_id: String,
    #[serde(rename = "ProductIDDescription")]
    pub product_id_description: String,
    #[serde(rename = "EOXInputValue")]
    pub eox_input_value: String,
    #[serde(rename = "EndOfSaleDate")]
    pub end_of_sale_date: EoxDate,
    #[serde(rename = "EndOfSWMaintenanceReleases")]
    pub end_of_sw_maintenance_releases: EoxDate,
    #[serde(rename = "EndOfSecurityVulSupportDate")]
    pub end_of_security_vul_support_date: EoxDate,
    #[serde(rename = "EndOfRoutineFailureAnalysisDate")]
    pub end_of_routine_failure_analysis_date: EoxDate,
    #[serde(rename = "EndOfServiceContractRenewal")]
    pub end_of_service_contract_renewal: EoxDate,
    #[serde(rename = "LastDateOfSupport")]
    pub last_date_of_support: EoxDate,
    #[serde(rename = "EndOfSvcAttachDate")]
    pub end_of_svc_attach_date: EoxDate,
    #[serde(rename = "EOXMigrationDetails")]
    pub eox_migration_details: MigrationDetails,
    #[serde(rename = "EOXError")]
    pub eox_error: Option<EoxError>,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct EoxResponse {
    #[serde(rename = "EOXRecord", default)]
    pub records: Vec<EoxRecord>,
}

/// Outcome of a single lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Found(EoxRecord),
    /// The API answered, but the first record has no product ID. Carries the
    /// API's explanation when it gave one.
    NotFound(Option<EoxError>),
}

impl EoxResponse {
    /// Only the first record is considered.
    pub fn into_lookup(self) -> Lookup {
        match self.records.into_iter().next() {
            Some(record) if record.eol_product_id.is_empty() => Lookup::NotFound(record.eox_error),
            Some(record) => Lookup::Found(record),
            None => Lookup::NotFound(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(json: &str) -> Lookup {
        serde_json::from_str::<EoxResponse>(json)
            .unwrap()
            .into_lookup()
    }

    #[test]
    fn found() {
        let res = lookup(
            r#"{"EOXRecord": [{
                "EOLProductID": "WS-C3750X-48P-S",
                "ProductIDDescription": "Catalyst 3750X 48 Port PoE",
                "EOXInputValue": "WS-C3750X-48P-S",
                "EndOfSaleDate": {"value": "2016-10-30", "dateFormat": "YYYY-MM-DD"},
                "LastDateOfSupport": {"value": "2021-10-31", "dateFormat": "YYYY-MM-DD"},
                "EOXMigrationDetails": {"MigrationProductId": "WS-C3850-48P-S"}
            }]}"#,
        );
        let record = match res {
            Lookup::Found(record) => record,
            other => panic!("expected a record, got {:?}", other),
        };
        assert_eq!(record.eol_product_id, "WS-C3750X-48P-S");
        assert_eq!(record.end_of_sale_date.value, "2016-10-30");
        assert_eq!(
            record.end_of_sale_date.date_format.as_deref(),
            Some("YYYY-MM-DD")
        );
        assert_eq!(record.last_date_of_support.value, "2021-10-31");
        assert_eq!(record.end_of_svc_attach_date, EoxDate::default());
        assert_eq!(
            record.eox_migration_details.migration_product_id,
            "WS-C3850-48P-S"
        );
    }

    #[test]
    fn empty_product_id_is_not_found() {
        let res = lookup(
            r#"{"EOXRecord": [{
                "EOLProductID": "",
                "EOXInputValue": "NOPE",
                "EOXError": {
                    "ErrorID": "SSA_ERR_026",
                    "ErrorDescription": "EOX information does not exist for the following product ID(s): NOPE"
                }
            }]}"#,
        );
        match res {
            Lookup::NotFound(Some(err)) => assert_eq!(err.error_id, "SSA_ERR_026"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn no_records_is_not_found() {
        assert_eq!(lookup(r#"{"EOXRecord": []}"#), Lookup::NotFound(None));
        assert_eq!(lookup("{}"), Lookup::NotFound(None));
    }

    #[test]
    fn only_first_record_counts() {
        let res = lookup(r#"{"EOXRecord": [{"EOLProductID": ""}, {"EOLProductID": "X"}]}"#);
        assert_eq!(res, Lookup::NotFound(None));
    }
}
