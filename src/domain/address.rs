/// Structured address fields returned by reverse geocoding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placemark {
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub postal_code: Option<String>,
}

impl Placemark {
    /// Street line and locality line, each made of the present fields joined by a single space.
    pub fn address_lines(&self) -> (String, String) {
        let line1 = join_present(&[&self.street_number, &self.street_name]);
        let line2 = join_present(&[&self.locality, &self.administrative_area, &self.postal_code]);
        (line1, line2)
    }
}

fn join_present(fields: &[&Option<String>]) -> String {
    fields
        .iter()
        .filter_map(|field| field.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outcome of the latest completed address resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum AddressResult {
    Resolved(Placemark),
    Unavailable(String),
}
