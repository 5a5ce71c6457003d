use std::fs;

use mython::{run, run_to_string};

fn assert_output(src: &str, expected: &str) {
    match run_to_string(src) {
        Ok(output) => assert_eq!(output, expected, "for script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\nScript:\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if run(src, &mut Vec::<u8>::new()).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("x = 1\nprint x\n", "1\n");
    assert_output("x = 2 + 3 * 4\nprint x\n", "14\n");
    assert_output("print 8 - 5, 10 / 2\n", "3 5\n");
    assert_output("print (2 + 3) * 4\n", "20\n");
    assert_output("print 7 / 2, -7 / 2\n", "3 -3\n");
    assert_output("print -5 + 2\n", "-3\n");
}

#[test]
fn string_literals_and_concatenation() {
    assert_output("print 'foo' + \"bar\"\n", "foobar\n");
    assert_output("print 'a\\tb'\n", "a\tb\n");
    assert_output("print 'it\\'s'\n", "it's\n");
    assert_output("s = 'new\\nline'\nprint s\n", "new\nline\n");
}

#[test]
fn print_forms() {
    assert_output("print\n", "\n");
    assert_output("print 1, 'two', True, None\n", "1 two True None\n");
}

#[test]
fn comparisons_on_primitives() {
    assert_output("print 1 < 2, 2 <= 2, 3 > 4, 1 == 1, 1 != 1, 5 >= 6\n",
                  "True True False True False False\n");
    assert_output("print 'abc' < 'abd', 'a' + 'b' == 'ab'\n", "True True\n");
    assert_output("print None == None, None != None, None == 1\n",
                  "True False False\n");
}

#[test]
fn logical_connectives_are_boolean() {
    assert_output("print True and False, True or False, not True, not ''\n",
                  "False True False True\n");
    assert_output("print 1 and 2\n", "True\n");
    assert_output("print 0 or ''\n", "False\n");
}

#[test]
fn connectives_short_circuit() {
    let src = "class Probe:\n\
               \x20 def __init__(self):\n\
               \x20   self.hits = 0\n\
               \x20 def bump(self):\n\
               \x20   self.hits = self.hits + 1\n\
               \x20   return True\n\
               p = Probe()\n\
               a = False and p.bump()\n\
               b = True or p.bump()\n\
               print p.hits\n\
               c = True and p.bump()\n\
               print p.hits\n";
    assert_output(src, "0\n1\n");
}

#[test]
fn if_else_and_truthiness() {
    assert_output("if 1:\n  print 'yes'\nelse:\n  print 'no'\n", "yes\n");
    assert_output("if '':\n  print 'yes'\nelse:\n  print 'no'\n", "no\n");
    assert_output("if None:\n  print 1\nelse:\n  print 2\n", "2\n");
    assert_output("if 1 < 2: print 'less'\n", "less\n");
    assert_output("x = 5\nif x < 3:\n  print 'small'\nelse:\n  if x < 10:\n    print 'medium'\n  else:\n    print 'large'\n",
                  "medium\n");
}

#[test]
fn instances_are_falsy() {
    let src = "class C:\n\
               \x20 def f(self):\n\
               \x20   return 1\n\
               if C():\n\
               \x20 print 'truthy'\n\
               else:\n\
               \x20 print 'falsy'\n";
    assert_output(src, "falsy\n");
}

#[test]
fn method_call_returns_value() {
    let src = "class C:\n\
               \x20 def f(self):\n\
               \x20   return 42\n\
               c = C()\n\
               print c.f()\n";
    assert_output(src, "42\n");
}

#[test]
fn method_without_return_yields_none() {
    let src = "class C:\n\
               \x20 def f(self):\n\
               \x20   x = 1\n\
               c = C()\n\
               print c.f()\n";
    assert_output(src, "None\n");
}

#[test]
fn one_line_method_suite() {
    assert_output("class C:\n  def f(self): return 9\nprint C().f()\n", "9\n");
}

#[test]
fn init_populates_fields() {
    let src = "class Point:\n\
               \x20 def __init__(self, x, y):\n\
               \x20   self.x = x\n\
               \x20   self.y = y\n\
               p = Point(3, 4)\n\
               print p.x, p.y\n";
    assert_output(src, "3 4\n");
}

#[test]
fn fields_mutate_across_calls() {
    let src = "class Counter:\n\
               \x20 def __init__(self):\n\
               \x20   self.count = 0\n\
               \x20 def bump(self):\n\
               \x20   self.count = self.count + 1\n\
               \x20   return self.count\n\
               c = Counter()\n\
               c.bump()\n\
               c.bump()\n\
               print c.bump()\n";
    assert_output(src, "3\n");
}

#[test]
fn str_dunder_drives_printing() {
    let src = "class A:\n\
               \x20 def __str__(self):\n\
               \x20   return 'hi'\n\
               print A()\n";
    assert_output(src, "hi\n");

    let src = "class Named:\n\
               \x20 def __init__(self, name):\n\
               \x20   self.name = name\n\
               \x20 def __str__(self):\n\
               \x20   return 'Named(' + self.name + ')'\n\
               print Named('a'), 1, 'x'\n";
    assert_output(src, "Named(a) 1 x\n");
}

#[test]
fn stringify_builtin() {
    assert_output("print str(42) + '!'\n", "42!\n");
    assert_output("print str(None)\n", "None\n");
    assert_output("print str(1 == 1)\n", "True\n");
}

#[test]
fn stringify_matches_print_output() {
    // Rendering through str(...) and printing directly agree byte for byte.
    for value in ["42", "-7", "'text'", "True", "False", "None"] {
        let direct = run_to_string(&format!("print {value}\n")).unwrap();
        let via_str = run_to_string(&format!("print str({value})\n")).unwrap();
        assert_eq!(direct, via_str, "for value {value}");
    }
}

#[test]
fn classes_print_by_name() {
    let src = "class C:\n\
               \x20 def f(self):\n\
               \x20   return 1\n\
               print C\n";
    assert_output(src, "Class C\n");
}

#[test]
fn add_dunder_dispatch() {
    let src = "class Vec:\n\
               \x20 def __init__(self, x):\n\
               \x20   self.x = x\n\
               \x20 def __add__(self, other):\n\
               \x20   return self.x + other.x\n\
               print Vec(1) + Vec(2)\n";
    assert_output(src, "3\n");
}

#[test]
fn eq_dunder_and_inheritance() {
    let src = "class B:\n\
               \x20 def __eq__(self, other):\n\
               \x20   return True\n\
               class D(B):\n\
               \x20 def noop(self):\n\
               \x20   return None\n\
               print D() == D()\n";
    assert_output(src, "True\n");
}

#[test]
fn lt_dunder_and_derived_comparators() {
    let src = "class Num:\n\
               \x20 def __init__(self, v):\n\
               \x20   self.v = v\n\
               \x20 def __lt__(self, other):\n\
               \x20   return self.v < other.v\n\
               \x20 def __eq__(self, other):\n\
               \x20   return self.v == other.v\n\
               a = Num(1)\n\
               b = Num(2)\n\
               print a < b, a > b, a <= b, a >= b, a == b, a != b\n";
    assert_output(src, "True False True False False True\n");
}

#[test]
fn method_override_beats_parent() {
    let src = "class B:\n\
               \x20 def who(self):\n\
               \x20   return 'base'\n\
               class D(B):\n\
               \x20 def who(self):\n\
               \x20   return 'derived'\n\
               class E(B):\n\
               \x20 def other(self):\n\
               \x20   return 0\n\
               print D().who(), E().who()\n";
    assert_output(src, "derived base\n");
}

#[test]
fn returns_propagate_from_nested_blocks() {
    let src = "class C:\n\
               \x20 def classify(self, n):\n\
               \x20   if n < 0:\n\
               \x20     return 'neg'\n\
               \x20   if n == 0:\n\
               \x20     return 'zero'\n\
               \x20   return 'pos'\n\
               c = C()\n\
               print c.classify(-5), c.classify(0), c.classify(7)\n";
    assert_output(src, "neg zero pos\n");
}

#[test]
fn top_level_return_stops_the_program() {
    assert_output("print 1\nreturn\nprint 2\n", "1\n");
}

#[test]
fn method_call_on_non_instance_yields_none() {
    assert_output("x = 1\nprint x.f()\n", "None\n");
}

#[test]
fn field_assignment_on_non_instance_is_skipped() {
    assert_output("x = 1\nx.y = 2\nprint x\n", "1\n");
    // The right-hand side is not even evaluated.
    assert_output("x = 1\nx.y = 1 / 0\nprint 'ok'\n", "ok\n");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let src = "# leading comment\n\
               x = 1  # trailing comment\n\
               \n\
               \n\
               print x\n";
    assert_output(src, "1\n");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("print 10 / 0\n");
}

#[test]
fn mixed_operand_arithmetic_is_error() {
    assert_failure("print 1 + \"x\"\n");
    assert_failure("print 'a' - 'b'\n");
    assert_failure("print True * 2\n");
}

#[test]
fn incompatible_comparisons_are_error() {
    assert_failure("print 1 == 'one'\n");
    assert_failure("print None < 1\n");
    assert_failure("print 1 < 'two'\n");
}

#[test]
fn unknown_names_are_errors() {
    assert_failure("print y\n");
    assert_failure("x = 1\nprint x.field\n");

    let src = "class C:\n\
               \x20 def f(self):\n\
               \x20   return 1\n\
               c = C()\n\
               print c.missing\n";
    assert_failure(src);
}

#[test]
fn missing_or_wrong_arity_methods_are_errors() {
    let src = "class C:\n\
               \x20 def f(self):\n\
               \x20   return 1\n\
               c = C()\n\
               c.g()\n";
    assert_failure(src);

    let src = "class C:\n\
               \x20 def f(self):\n\
               \x20   return 1\n\
               c = C()\n\
               c.f(1)\n";
    assert_failure(src);
}

#[test]
fn duplicate_method_is_definition_error() {
    let src = "class C:\n\
               \x20 def f(self):\n\
               \x20   return 1\n\
               \x20 def f(self):\n\
               \x20   return 2\n\
               print 1\n";
    assert_failure(src);
}

#[test]
fn undefined_class_is_error() {
    assert_failure("x = Missing()\n");
    assert_failure("class D(Missing):\n  def f(self):\n    return 1\n");
}

#[test]
fn method_must_take_self_first() {
    assert_failure("class C:\n  def f(x):\n    return 1\n");
}

#[test]
fn oversized_integer_literal_is_error() {
    assert_failure("x = 99999999999999999999999\n");
}

#[test]
fn integer_overflow_is_error() {
    assert_failure("x = 9223372036854775807\nprint x + 1\n");
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.my").expect("missing file");
    assert_output(&script,
                  "rect area 12\nsquare area 25\nsquare wins\n");
}
