use std::marker::PhantomData;

use insta::assert_snapshot;
use kdebug::{Dumper, Inspect, Kind, classify, dump};

#[derive(Inspect)]
enum Shape {
    Circle { radius: f64 },
    Pair(u8, u8),
    Empty,
}

#[test]
fn enums_dump_as_their_variant() {
    assert_snapshot!(Dumper::new().format(&Shape::Circle { radius: 1.5 }), @r#"
    struct[Shape::Circle] ==> {
        radius [f64] : 1.5
    } //end struct
    "#);
    assert_eq!(
        dump(&Shape::Pair(1, 2)),
        [
            "struct[Shape::Pair] ==> {",
            "    0 [u8] : 1",
            "    1 [u8] : 2",
            "} //end struct",
        ]
    );
    assert_eq!(dump(&Shape::Empty), ["struct[Shape::Empty] ==> {", "} //end struct"]);
}

#[derive(Inspect)]
struct Meters(f32);

#[derive(Inspect)]
struct Marker;

#[test]
fn tuple_and_unit_structs() {
    assert_eq!(
        dump(&Meters(2.5)),
        ["struct[Meters] ==> {", "    0 [f32] : 2.5", "} //end struct"]
    );
    assert_eq!(dump(&Marker), ["struct[Marker] ==> {", "} //end struct"]);
    assert_eq!(classify(&Marker), Kind::Struct);
}

#[derive(Inspect)]
struct Wrapper<'a, T> {
    inner: &'a T,
    tag: PhantomData<T>,
}

#[test]
fn generic_structs_name_their_parameters() {
    let value = 3u16;
    let wrapper = Wrapper {
        inner: &value,
        tag: PhantomData,
    };
    assert_snapshot!(Dumper::new().format(&wrapper), @r#"
    struct[Wrapper<u16>] ==> {
        inner [u16] : 3
        tag [nil] : <nil>
    } //end struct
    "#);
}

#[derive(Inspect)]
struct Credentials {
    user: &'static str,
    #[inspect(skip)]
    #[allow(dead_code)]
    password: &'static str,
}

#[test]
fn skipped_fields_are_left_out() {
    let credentials = Credentials {
        user: "ann",
        password: "hunter2",
    };
    let output = Dumper::new().format(&credentials);
    assert!(!output.contains("password"));
    assert!(!output.contains("hunter2"));
    assert!(output.contains("user [str](3) ==> \"ann\""));
}
