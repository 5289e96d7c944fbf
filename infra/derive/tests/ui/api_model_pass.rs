use arcade_derive::api_model;

#[api_model]
/// A catalog row as sent over the wire
pub struct DomainRow {
    pub domain_num: u32,
    pub total_pages: u32,
}

#[api_model]
#[derive(Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct RawRow {
    pub page_num: u32,
}

fn main() {
    let row = DomainRow { domain_num: 2, total_pages: 39 };
    let json = serde_json::to_string(&row).unwrap();
    assert_eq!(json, r#"{"domainNum":2,"totalPages":39}"#);

    let err = serde_json::from_str::<DomainRow>(r#"{"domainNum":1,"totalPages":38,"extra":0}"#);
    assert!(err.is_err());

    let raw: RawRow = serde_json::from_str(r#"{"page_num":7}"#).unwrap();
    assert_eq!(raw.clone(), RawRow { page_num: 7 });
    println!("{row:?}");
}
