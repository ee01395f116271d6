use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use insta::assert_snapshot;
use kdebug::{Dumper, FieldHandle, Inspect, Opaque, ValueHandle, dump};
use kdebug_testhelpers::{join_lines, setup};

#[derive(Inspect)]
#[allow(non_snake_case)]
struct Person {
    Name: String,
    Age: i32,
}

#[derive(Inspect)]
struct Team {
    name: &'static str,
    members: Vec<Person>,
    lead: Option<Person>,
}

#[test]
fn vector_of_integers() {
    let output = Dumper::new().format(&vec![1, 2, 3]);
    assert_snapshot!(output, @r#"
    slice[Vec<i32>](3) ==>
        [0] : [i32] : 1
        [1] : [i32] : 2
        [2] : [i32] : 3
    //end slice
    "#);
}

#[test]
fn flat_struct() {
    let person = Person {
        Name: "Bob".to_string(),
        Age: 30,
    };
    assert_snapshot!(Dumper::new().format(&person), @r#"
    struct[Person] ==> {
        Name [String](3) ==> "Bob"
        Age [i32] : 30
    } //end struct
    "#);
}

#[test]
fn nested_structs_and_nil_pointers() {
    setup();
    let team = Team {
        name: "core",
        members: vec![Person {
            Name: "Ann".to_string(),
            Age: 41,
        }],
        lead: None,
    };
    assert_snapshot!(Dumper::new().format(&team), @r#"
    struct[Team] ==> {
        name [str](4) ==> "core"
        members slice[Vec<Person>](1) ==>
            [0] : struct[Person] ==> {
                Name [String](3) ==> "Ann"
                Age [i32] : 41
            } //end struct
        //end slice
        lead [Option<Person>] --> <nil pointer>
    } //end struct
    "#);
}

#[test]
fn maps_render_keys_inline() {
    let scores: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_snapshot!(Dumper::new().format(&scores), @r#"
    map[BTreeMap<&str, i32>](2) ==>
        "a" : [i32] : 1
        "b" : [i32] : 2
    "#);
}

#[test]
fn hash_maps_are_sorted_by_key() {
    let mut map = HashMap::new();
    for (key, value) in [("zeta", 1u8), ("mu", 2), ("alpha", 3)] {
        map.insert(key.to_string(), value);
    }
    assert_eq!(
        dump(&map),
        [
            "map[HashMap<String, u8>](3) ==>",
            "    \"alpha\" : [u8] : 3",
            "    \"mu\" : [u8] : 2",
            "    \"zeta\" : [u8] : 1",
        ]
    );
}

#[test]
fn composite_map_keys_stay_on_one_line() {
    let map: BTreeMap<(u8, &str), bool> = [((1, "x"), true)].into_iter().collect();
    assert_eq!(dump(&map)[1], "    \"{1 x}\" : [bool] : true");
}

#[test]
fn pointers_are_followed_on_one_line() {
    let value = Some(Box::new(5u8));
    assert_eq!(dump(&value), ["[Option<Box<u8>>] --> [Box<u8>] --> [u8] : 5"]);

    let shared = Rc::new(vec![true]);
    assert_snapshot!(Dumper::new().format(&shared), @r#"
    [Rc<Vec<bool>>] --> slice[Vec<bool>](1) ==>
        [0] : [bool] : true
    //end slice
    "#);
}

#[test]
fn raw_pointers_show_only_their_address() {
    assert_eq!(
        dump(&std::ptr::null::<u8>()),
        ["[*const u8] --> <nil pointer>"]
    );

    let value = 9u8;
    let ptr: *const u8 = &value;
    let lines = dump(&ptr);
    assert_eq!(lines, [format!("[opaqueptr] --> {:#x}", ptr as usize)]);
}

#[test]
fn pointer_sized_integers_are_hex() {
    assert_eq!(dump(&255usize), ["[usize] : 0xff"]);
    assert_eq!(dump(&-3isize), ["[isize] : -3"]);
}

#[test]
fn scalars_and_nil() {
    assert_eq!(dump(&()), ["[nil] : <nil>"]);
    assert_eq!(dump(&true), ["[bool] : true"]);
    assert_eq!(dump(&'x'), ["[char] : x"]);
    assert_eq!(dump(&0.25f64), ["[f64] : 0.25"]);
}

#[test]
fn every_numeric_width_dumps_one_line() {
    let cases: [(&dyn Inspect, &str); 14] = [
        (&-8i8, "[i8] : -8"),
        (&-16i16, "[i16] : -16"),
        (&-32i32, "[i32] : -32"),
        (&-64i64, "[i64] : -64"),
        (&-128i128, "[i128] : -128"),
        (&-1isize, "[isize] : -1"),
        (&8u8, "[u8] : 8"),
        (&16u16, "[u16] : 16"),
        (&32u32, "[u32] : 32"),
        (&64u64, "[u64] : 64"),
        (&u128::MAX, "[u128] : 340282366920938463463374607431768211455"),
        (&16usize, "[usize] : 0x10"),
        (&1.5f32, "[f32] : 1.5"),
        (&-2.25f64, "[f64] : -2.25"),
    ];
    for (value, expected) in cases {
        assert_eq!(dump(value), [expected]);
    }
}

struct MultiLine;

impl std::fmt::Display for MultiLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("first\nsecond")
    }
}

struct Spread;

impl Inspect for Spread {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::structure(
            "Spread",
            vec![
                FieldHandle::new("unknown", &OPAQUE),
                FieldHandle::new("callable", &CALLABLE),
            ],
        )
    }
}

static OPAQUE: Opaque<MultiLineDebug> = Opaque(MultiLineDebug);
static CALLABLE: Callable = Callable;

struct MultiLineDebug;

impl std::fmt::Debug for MultiLineDebug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("first\nsecond")
    }
}

struct Callable;

impl Inspect for Callable {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::opaque("Callable", "line\rbreak")
    }
}

#[test]
fn scalar_text_stays_on_one_line() {
    assert_eq!(dump(&Opaque(MultiLineDebug)), ["[Unknown] : first\\nsecond"]);
    assert_eq!(
        dump(&ValueHandle::integer("Big", MultiLine)),
        ["[Big] : first\\nsecond"]
    );
    assert_snapshot!(Dumper::new().format(&Spread), @r#"
    struct[Spread] ==> {
        unknown [Unknown] : first\nsecond
        callable [Callable]line\rbreak
    } //end struct
    "#);
}

#[test]
fn strings_escape_control_characters() {
    let text = "a\nb\t\"q\"";
    assert_eq!(dump(&text), ["[str](7) ==> \"a\\nb\\t\"q\"\""]);
    assert_eq!(dump(&""), ["[str](0) ==> \"\""]);
    assert_eq!(dump(&"héllo"), ["[str](6) ==> \"héllo\""]);
}

#[test]
fn arrays_have_no_trailer() {
    assert_snapshot!(Dumper::new().format(&[1u8, 2]), @r#"
    array[[u8; 2]](2) ==>
        [0] : [u8] : 1
        [1] : [u8] : 2
    "#);
}

#[test]
fn empty_slices_still_close() {
    assert_eq!(dump(&Vec::<u8>::new()), ["slice[Vec<u8>](0) ==>", "//end slice"]);
}

fn double(x: i32) -> i32 {
    x * 2
}

#[test]
fn functions_print_their_address() {
    let f: fn(i32) -> i32 = double;
    let lines = dump(&f);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[fn(i32) -> i32]0x"), "{lines:?}");
}

#[test]
fn opaque_values_are_unknown() {
    assert_eq!(dump(&Opaque(std::time::Duration::from_secs(2))), ["[Unknown] : 2s"]);
}

struct Exploding;

impl Inspect for Exploding {
    fn inspect(&self) -> ValueHandle<'_> {
        panic!("boom")
    }
}

#[derive(Inspect)]
struct Holder {
    ok: u8,
    bad: Exploding,
}

#[test]
fn panicking_implementations_do_not_stop_the_dump() {
    setup();
    let holder = Holder { ok: 1, bad: Exploding };
    assert_snapshot!(Dumper::new().format(&holder), @r#"
    struct[Holder] ==> {
        ok [u8] : 1
        bad [Unknown] : <introspection fault: boom>
    } //end struct
    "#);
}

struct SelfRef;

impl Inspect for SelfRef {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::pointer("SelfRef", Some(self as &dyn Inspect))
    }
}

#[test]
fn cycles_are_cut() {
    setup();
    assert_eq!(dump(&SelfRef), ["[SelfRef] --> [SelfRef] <cycle>"]);
}

struct Twin;

impl Inspect for Twin {
    fn inspect(&self) -> ValueHandle<'_> {
        ValueHandle::structure(
            "Twin",
            vec![FieldHandle::new("left", self), FieldHandle::new("right", self)],
        )
    }
}

#[test]
fn values_reaching_themselves_through_fields_are_cut() {
    setup();
    assert_snapshot!(Dumper::new().format(&Twin), @r#"
    struct[Twin] ==> {
        left [Twin] <cycle>
        right [Twin] <cycle>
    } //end struct
    "#);

    let pair = vec![Twin, Twin];
    let lines = Dumper::new().with_max_depth(16).lines(&pair);
    assert_eq!(lines.len(), 10);
    assert_eq!(lines.iter().filter(|line| line.ends_with("<cycle>")).count(), 4);
}

#[derive(Inspect)]
struct Shared<'a> {
    first: &'a Vec<u8>,
    second: &'a Vec<u8>,
}

#[test]
fn shared_values_are_not_cycles() {
    let bytes = vec![1u8];
    let shared = Shared {
        first: &bytes,
        second: &bytes,
    };
    let output = Dumper::new().format(&shared);
    assert!(!output.contains("<cycle>"), "{output}");
    assert_eq!(output.matches("[0] : [u8] : 1").count(), 2);
}

#[test]
fn deep_values_are_truncated() {
    setup();
    let nested = vec![vec![1]];
    let output = Dumper::new().with_max_depth(1).format(&nested);
    assert_snapshot!(output, @r#"
    slice[Vec<Vec<i32>>](1) ==>
        [0] : [Vec<i32>] <max depth reached>
    //end slice
    "#);
}

#[test]
fn indent_size_is_configurable() {
    let lines = Dumper::new().with_indent_size(1).lines(&vec![vec![7u8]]);
    assert_eq!(
        lines,
        [
            "slice[Vec<Vec<u8>>](1) ==>",
            " [0] : slice[Vec<u8>](1) ==>",
            "  [0] : [u8] : 7",
            " //end slice",
            "//end slice",
        ]
    );
}

#[test]
fn colors_are_opt_in() {
    let person = Person {
        Name: "C".to_string(),
        Age: 1,
    };
    assert!(!Dumper::new().format(&person).contains('\u{1b}'));
    if std::env::var_os("NO_COLOR").is_none() {
        assert!(Dumper::new().with_colors(true).format(&person).contains('\u{1b}'));
    }
}

#[test]
fn dumps_are_repeatable() {
    let set: HashSet<u32> = (0..50).collect();
    let first = dump(&set);
    assert_eq!(first, dump(&set));
    assert_eq!(first.len(), 52);
    assert_eq!(first[1], "    [0] : [u32] : 0");
}

#[test]
fn lines_match_the_formatted_string() {
    let person = Person {
        Name: "D".to_string(),
        Age: 2,
    };
    assert_eq!(join_lines(&dump(&person)), Dumper::new().format(&person));
}
