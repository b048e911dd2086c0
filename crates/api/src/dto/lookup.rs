/// The two query-string parameters a lookup reads. When a key repeats, the
/// first occurrence wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LookupParams {
    pub fqdn: Option<String>,
    pub querytype: Option<String>,
}

impl LookupParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "fqdn" => &mut params.fqdn,
                "querytype" => &mut params.querytype,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}
