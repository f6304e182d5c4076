//! Language features: closures, bindings, types, patterns, parameters

use std::cell::OnceCell;
use vouch_runtime::prelude::*;

pub fn register(registry: &mut Registry) {
    registry
        .register("Closures", closures)
        .register("`let mut` binding", mutable_binding)
        .register("Immutable binding", immutable_binding)
        .register("Structs", structs)
        .register("Trait default methods", trait_default_methods)
        .register("Associated functions", associated_functions)
        .register("Getters and setters", getters_and_setters)
        .register("Field init shorthand", field_init_shorthand)
        .register("Format strings", format_strings)
        .register("Destructuring structs", destructuring_structs)
        .register("Destructuring arrays", destructuring_arrays)
        .register("Default parameters", default_parameters)
        .register("Slice parameters", slice_parameters)
        .register("Array arguments", array_arguments)
        .register_pending("Maps")
        .register_pending("Sets")
        .register_pending("Basic iterators")
        .register("Exponentiation", exponentiation);
}

fn closures() -> CaseResult {
    let add = |num1: i32, num2: i32| num1 + num2;
    assert_equal(add(4, 6), 10)?;

    // A block body for more than one statement
    let add_six = |num: i32| {
        let six = 6;
        num + six
    };
    assert_equal(add_six(4), 10)?;

    // Captures from the enclosing scope
    let six = 6;
    let add_captured = move |num: i32| num + six;
    assert_equal(add_captured(4), 10)?;
    Ok(())
}

fn mutable_binding() -> CaseResult {
    let mut my_bool = true;
    assert_equal(my_bool, true)?;

    my_bool = false;
    assert_equal(my_bool, false)?;
    Ok(())
}

fn immutable_binding() -> CaseResult {
    // A cell that can be written once stands in for a binding that refuses
    // reassignment at runtime
    let my_bool = OnceCell::new();
    assert_no_throw(|| my_bool.set(true))?;
    assert_equal(my_bool.get().copied(), true)?;

    assert_throws(|| my_bool.set(false))?;
    assert_equal(my_bool.get().copied(), true)?;
    Ok(())
}

struct Doubler {
    number: i32,
}

impl Doubler {
    fn new(number: i32) -> Self {
        Self { number }
    }

    fn double(&self) -> i32 {
        self.number * 2
    }
}

fn structs() -> CaseResult {
    let my_doubler = Doubler::new(10);
    assert_equal(my_doubler.double(), 20)?;
    Ok(())
}

trait Adder {
    fn number(&self) -> i32;

    fn add(&self, other: i32) -> i32 {
        self.number() + other
    }
}

struct Plain(i32);

impl Adder for Plain {
    fn number(&self) -> i32 {
        self.0
    }
}

struct Subtractor(i32);

impl Adder for Subtractor {
    fn number(&self) -> i32 {
        self.0
    }
}

impl Subtractor {
    fn subtract(&self, other: i32) -> i32 {
        self.number() - other
    }
}

fn trait_default_methods() -> CaseResult {
    let my_adder = Plain(5);
    assert_equal(my_adder.add(5), 10)?;

    let my_sub = Subtractor(10);
    assert_equal(my_sub.subtract(5), 5)?;
    assert_equal(my_sub.add(5), 15)?;
    Ok(())
}

struct Multiplier;

impl Multiplier {
    fn multiply(one: i32, two: i32) -> i32 {
        one * two
    }
}

fn associated_functions() -> CaseResult {
    assert_equal(Multiplier::multiply(3, 4), 12)?;
    Ok(())
}

struct Whoops {
    number: i32,
}

impl Whoops {
    fn new(number: i32) -> Self {
        Self { number: number + 2 }
    }

    fn number(&self) -> i32 {
        self.number
    }

    fn set_number(&mut self, number: i32) {
        self.number = number + 2;
    }
}

fn getters_and_setters() -> CaseResult {
    let mut whoops = Whoops::new(10);
    assert_equal(whoops.number(), 12)?;

    whoops.set_number(100);
    assert_equal(whoops.number(), 102)?;
    Ok(())
}

struct Numbers {
    ten: i32,
}

struct Pair {
    one: i32,
    two: i32,
}

impl Pair {
    fn add(&self) -> i32 {
        self.one + self.two
    }
}

fn field_init_shorthand() -> CaseResult {
    let ten = 10;

    // Same as Numbers { ten: ten }
    let numbers = Numbers { ten };
    assert_equal(numbers.ten, ten)?;

    let (one, two) = (4, 6);
    assert_equal(Pair { one, two }.add(), 10)?;
    Ok(())
}

fn format_strings() -> CaseResult {
    let ten = 10;

    let printout = format!("My string is {ten}");
    assert_equal(printout, "My string is 10")?;

    // String literals can span lines
    let newline = "this is
  a newline";
    assert_equal(newline, "this is\n  a newline")?;
    Ok(())
}

struct Deep {
    one: Span,
}

struct Span {
    first: i32,
    last: i32,
}

fn destructuring_structs() -> CaseResult {
    let numbers = Numbers { ten: 10 };

    let Numbers { ten } = numbers;
    assert_equal(ten, 10)?;

    // Patterns work in parameters too
    let add = |Pair { one, two }: Pair| one + two;
    assert_equal(add(Pair { one: 10, two: 20 }), 30)?;

    // Bind a field under another name
    let Numbers { ten: my_num } = Numbers { ten: 10 };
    assert_equal(my_num, 10)?;

    let deep_nums = Deep {
        one: Span {
            first: 100,
            last: 200,
        },
    };
    let Deep {
        one: Span { first, last },
    } = deep_nums;
    assert_equal(first, 100)?;
    assert_equal(last, 200)?;
    Ok(())
}

fn destructuring_arrays() -> CaseResult {
    let nums = [1, 2, 3, 4];

    let [one, two, ..] = nums;
    assert_equal(one, 1)?;
    assert_equal(two, 2)?;

    let sum = |[one, two, three]: [i32; 3]| one + two + three;
    assert_equal(sum([1, 2, 3]), 6)?;
    Ok(())
}

fn add_with_default(one: i32, two: Option<i32>) -> i32 {
    one + two.unwrap_or(10)
}

fn default_parameters() -> CaseResult {
    assert_equal(add_with_default(10, None), 20)?;
    assert_equal(add_with_default(10, Some(20)), 30)?;
    Ok(())
}

fn print(nums: &[i32]) -> String {
    nums.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn add_length(first: usize, rest: &[i32]) -> usize {
    first + rest.len()
}

fn slice_parameters() -> CaseResult {
    assert_equal(print(&[1, 2, 3]), "1, 2, 3")?;
    assert_equal(add_length(10, &[3, 4, 5]), 13)?;
    Ok(())
}

fn add3(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

fn array_arguments() -> CaseResult {
    let nums = [1, 2, 3];

    // Unpack an array into positional arguments
    let [a, b, c] = nums;
    assert_equal(add3(a, b, c), 6)?;

    let total: i32 = nums.iter().sum();
    assert_equal(total, add3(a, b, c))?;
    Ok(())
}

fn exponentiation() -> CaseResult {
    let two_to_eight = 2_i32.pow(8);
    assert_equal(two_to_eight, 256)?;
    assert_equal(10_f64.powi(3), 1000)?;
    Ok(())
}
