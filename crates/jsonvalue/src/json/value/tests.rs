use serde::Deserialize;

use crate::json::{Document, Expected, JsonError, Kind, Node, Path, PathSegment, Value, parse};

const SAMPLE: &[u8] = r#"{"foo":123,"bar":[1,2,3],"baz":null,"poo":false,"name":"héllo"}"#.as_bytes();

fn sample() -> Document {
	parse(SAMPLE)
}

#[test]
fn key_reaches_member() {
	let doc = sample();
	let foo = doc.root().key("foo");
	assert!(foo.error().is_none());
	assert_eq!(foo.path().to_strings(), ["foo"]);
	assert_eq!(foo.num(), Ok(123.0));
}

#[test]
fn missing_key_fails_with_quoted_key_and_extended_path() {
	let doc = sample();
	let missing = doc.root().key("missing_key");
	let err = missing.error().expect("missing key fails");
	assert!(matches!(err, JsonError::KeyNotFound { key, .. } if key == "missing_key"));
	assert!(err.to_string().contains("key not found \"missing_key\""));
	assert_eq!(missing.path().to_strings(), ["missing_key"]);
	assert_eq!(missing.to_string(), "$.missing_key: key not found \"missing_key\"");
}

#[test]
fn key_and_index_chain() {
	let doc = sample();
	let item = doc.root().key("bar").index(1);
	assert!(item.is_ok());
	assert_eq!(item.path().to_strings(), ["bar", "1"]);
	assert_eq!(item.num(), Ok(2.0));
}

#[test]
fn index_out_of_range_reports_index_and_length() {
	let doc = sample();
	let item = doc.root().key("bar").index(99);
	assert_eq!(item.path().to_strings(), ["bar", "99"]);
	assert!(matches!(item.error(), Some(JsonError::IndexOutOfRange { index: 99, len: 3, .. })));
	assert_eq!(item.to_string(), "$.bar[99]: index out of range 99 (len=3)");
}

#[test]
fn navigating_into_wrong_kind_is_a_type_mismatch() {
	let doc = sample();

	let not_object = doc.root().key("bar").key("x");
	assert_eq!(not_object.path().to_strings(), ["bar", "x"]);
	assert!(matches!(
		not_object.error(),
		Some(JsonError::TypeMismatch {
			expected: Expected::Object,
			actual: Kind::Array,
			..
		})
	));

	let not_array = doc.root().key("foo").index(0);
	assert_eq!(not_array.path().to_strings(), ["foo", "0"]);
	assert!(matches!(
		not_array.error(),
		Some(JsonError::TypeMismatch {
			expected: Expected::Array,
			actual: Kind::Number,
			..
		})
	));
	assert_eq!(not_array.to_string(), "$.foo[0]: not an array (got number)");
}

#[test]
fn failed_accessor_is_terminal() {
	let doc = sample();
	let failed = doc.root().key("missing_key");
	let expected_err = failed.error().cloned();
	let expected_path = failed.path().clone();

	for next in [
		failed.key("a"),
		failed.index(0),
		failed.lookup(["a", "b"]),
		failed.at(&Path::root().child("bar").child(1_usize)),
		failed.at_str("bar[1]"),
		failed.at_str("not a path"),
	] {
		assert_eq!(next.error().cloned(), expected_err);
		assert_eq!(next.path(), &expected_path);
	}
}

#[test]
fn deriving_a_child_leaves_parent_live() {
	let doc = sample();
	let root = doc.root();
	let _missing = root.key("nope");
	let bar = root.key("bar");
	assert!(root.is_ok());
	assert!(root.path().is_empty());
	assert!(bar.is_ok());
}

#[test]
fn lookup_stops_at_first_failure() {
	let doc = parse(br#"{"a":{"b":{"c":"deep"}}}"#);
	assert_eq!(doc.root().lookup(["a", "b", "c"]).str(), Ok("deep"));

	let stopped = doc.root().lookup(["a", "x", "c", "d"]);
	assert_eq!(stopped.path().to_strings(), ["a", "x"]);
	assert!(matches!(stopped.error(), Some(JsonError::KeyNotFound { .. })));

	let none: [&str; 0] = [];
	assert!(doc.root().lookup(none).path().is_empty());
}

#[test]
fn at_follows_mixed_paths() {
	let doc = parse(br#"{"items":[{"id":7},{"id":8,"tags":["a","b"]}]}"#);
	assert_eq!(doc.root().at_str("items[1].tags[0]").str(), Ok("a"));
	assert_eq!(doc.root().at_str("$.items[0].id").num(), Ok(7.0));

	let path: Path = vec![PathSegment::from("items"), PathSegment::from(1_usize), PathSegment::from("id")].into();
	assert_eq!(doc.root().at(&path).num(), Ok(8.0));

	let stopped = doc.root().at_str("items[5].id");
	assert_eq!(stopped.path().to_strings(), ["items", "5"]);
}

#[test]
fn at_str_rejects_malformed_expression_without_extending_path() {
	let doc = parse(br#"{"a":{"b":1}}"#);
	let a = doc.root().key("a");
	let bad = a.at_str("b..c");
	assert_eq!(bad.path().to_strings(), ["a"]);
	assert!(matches!(bad.error(), Some(JsonError::InvalidPath { expr }) if expr == "b..c"));
	assert_eq!(bad.to_string(), "$.a: invalid path expression: b..c");
}

#[test]
fn typed_extraction_mismatch_is_not_sticky() {
	let doc = sample();
	let foo = doc.root().key("foo");

	let err = foo.str().expect_err("number is not a string");
	assert_eq!(
		err,
		JsonError::TypeMismatch {
			path: Path::root().child("foo"),
			expected: Expected::String,
			actual: Kind::Number,
		}
	);
	assert_eq!(err.to_string(), "$.foo: not a string (got number)");
	assert!(matches!(foo.bool(), Err(JsonError::TypeMismatch { expected: Expected::Boolean, .. })));

	assert!(foo.is_ok());
	assert_eq!(foo.num(), Ok(123.0));
}

#[test]
fn typed_extraction_on_failed_accessor_returns_stored_error() {
	let doc = sample();
	let failed = doc.root().key("bar").index(7);
	let stored = failed.error().cloned().expect("index fails");

	assert_eq!(failed.str().err(), Some(stored.clone()));
	assert_eq!(failed.bool().err(), Some(stored.clone()));
	assert_eq!(failed.num().err(), Some(stored.clone()));
	assert_eq!(failed.len().err(), Some(stored.clone()));
	assert_eq!(failed.object().err(), Some(stored.clone()));
	assert_eq!(failed.array().err(), Some(stored.clone()));
	assert_eq!(failed.try_kind(), Err(stored));
}

#[test]
fn scalar_extractors_read_matching_kinds() {
	let doc = sample();
	assert_eq!(doc.root().key("name").str(), Ok("héllo"));
	assert_eq!(doc.root().key("poo").bool(), Ok(false));
	assert_eq!(doc.root().key("bar").index(2).num(), Ok(3.0));
	assert!(doc.root().key("baz").num().is_err());
}

#[test]
fn kind_and_null_checks() {
	let doc = sample();
	assert_eq!(doc.root().kind(), Kind::Object);
	assert_eq!(doc.root().key("bar").kind(), Kind::Array);
	assert_eq!(doc.root().key("foo").kind(), Kind::Number);
	assert_eq!(doc.root().key("name").kind(), Kind::String);
	assert_eq!(doc.root().key("poo").kind(), Kind::Boolean);

	let baz = doc.root().key("baz");
	assert_eq!(baz.kind(), Kind::Null);
	assert!(baz.is_null());
	assert_eq!(baz.try_kind(), Ok(Kind::Null));

	let missing = doc.root().key("missing");
	assert_eq!(missing.kind(), Kind::Null);
	assert!(missing.is_null());
	assert!(missing.try_kind().is_err());
}

#[test]
fn object_materializes_children_with_extended_paths() {
	let doc = sample();
	let members = doc.root().object().expect("root is an object");
	assert_eq!(members.len(), 5);

	let bar = &members["bar"];
	assert_eq!(bar.path().to_strings(), ["bar"]);
	assert_eq!(bar.len(), Ok(3));

	for (key, child) in &members {
		assert_eq!(child.path().last(), Some(&PathSegment::Key((*key).to_owned())));
	}

	let err = doc.root().key("bar").object().expect_err("array is not an object");
	assert!(matches!(err, JsonError::TypeMismatch { expected: Expected::Object, actual: Kind::Array, .. }));
}

#[test]
fn array_materializes_children_in_index_order() {
	let doc = sample();
	let items = doc.root().key("bar").array().expect("bar is an array");
	let paths: Vec<_> = items.iter().map(|item| item.path().to_strings()).collect();
	assert_eq!(paths, [["bar", "0"], ["bar", "1"], ["bar", "2"]]);
	let nums: Vec<_> = items.iter().map(|item| item.num().expect("numeric element")).collect();
	assert_eq!(nums, [1.0, 2.0, 3.0]);

	assert!(matches!(
		doc.root().array(),
		Err(JsonError::TypeMismatch {
			expected: Expected::Array,
			actual: Kind::Object,
			..
		})
	));
}

#[test]
fn len_counts_array_elements_and_string_characters() {
	let doc = sample();
	assert_eq!(doc.root().key("bar").len(), Ok(3));
	assert_eq!(doc.root().key("name").len(), Ok(5));
	assert_eq!(doc.root().key("name").is_empty(), Ok(false));

	let err = doc.root().len().expect_err("objects have no length");
	assert!(matches!(
		err,
		JsonError::TypeMismatch {
			expected: Expected::ArrayOrString,
			actual: Kind::Object,
			..
		}
	));
	assert_eq!(err.to_string(), "$: not an array or string (got object)");
}

#[test]
fn deserialize_into_typed_struct() {
	#[derive(Debug, Deserialize, PartialEq)]
	struct Item<'a> {
		id: u32,
		title: &'a str,
	}

	let doc = parse(br#"{"items":[{"id":1,"title":"first"},{"id":"two","title":"second"}]}"#);
	let first: Item<'_> = doc.root().at_str("items[0]").deserialize().expect("item deserializes");
	assert_eq!(first, Item { id: 1, title: "first" });

	let err = doc.root().at_str("items[1]").deserialize::<Item<'_>>().expect_err("id is not a number");
	assert!(matches!(&err, JsonError::Deserialize { path, .. } if path.to_strings() == ["items", "1"]));

	let bar: Vec<u8> = sample().root().key("bar").deserialize().expect("bar deserializes");
	assert_eq!(bar, [1, 2, 3]);
}

#[test]
fn display_renders_live_values() {
	let doc = sample();
	assert_eq!(doc.root().key("foo").to_string(), "123");
	assert_eq!(doc.root().key("name").to_string(), "héllo");
	assert_eq!(doc.root().key("bar").to_string(), "[1,2,3]");
	assert_eq!(doc.root().key("baz").to_string(), "null");
}

#[test]
fn wraps_borrowed_node() {
	let node = Node::from(vec!["a", "b"]);
	let value = Value::new(&node);
	assert_eq!(value.index(1).str(), Ok("b"));
}

#[test]
fn accessors_are_shareable_across_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<Value<'static>>();
	assert_send_sync::<Document>();
}
