pub(crate) mod jq;

pub(crate) use jq::filter_json;
