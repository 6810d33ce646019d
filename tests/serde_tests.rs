//! Serialization of the data-carrying containers.

#![cfg(all(feature = "serde", feature = "control"))]

use cairn::control::{Either, Error, Maybe, OneOf2, Outcome};
use rstest::rstest;

#[rstest]
fn error_serializes_as_its_message() {
    let json = serde_json::to_string(&Error::new("Boom!")).unwrap();
    assert_eq!(json, "\"Boom!\"");
}

#[rstest]
fn containers_use_externally_tagged_variants() {
    assert_eq!(serde_json::to_string(&Maybe::some(1)).unwrap(), r#"{"Some":1}"#);
    assert_eq!(serde_json::to_string(&Maybe::<i32>::none()).unwrap(), r#""None""#);

    let failed: Outcome<i32> = Outcome::failure("Boom!");
    assert_eq!(serde_json::to_string(&failed).unwrap(), r#"{"Failure":"Boom!"}"#);

    let right: Either<String, u8> = Either::Right(3);
    assert_eq!(serde_json::to_string(&right).unwrap(), r#"{"Right":3}"#);
}

#[rstest]
fn tagged_union_reads_back() {
    let decoded: OneOf2<u32, String> = serde_json::from_str(r#"{"T2":"two"}"#).unwrap();
    assert_eq!(decoded, OneOf2::T2("two".to_string()));

    let decoded: Outcome<Vec<u8>> = serde_json::from_str(r#"{"Success":[1,2]}"#).unwrap();
    assert_eq!(decoded, Outcome::success(vec![1, 2]));
}
