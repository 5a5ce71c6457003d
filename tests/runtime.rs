use std::rc::Rc;

use mython::{
    ast::{Comparator, Statement},
    interpreter::{
        evaluator::core::Context,
        value::{
            class::{Class, ClassInstance, Method},
            core::{Value, ValueHandle},
        },
    },
};

fn empty_method(name: &str) -> Method {
    Method { name:          name.to_string(),
             formal_params: vec![],
             body:          Statement::MethodBody { body: Box::new(Statement::Compound { statements: vec![] }) }, }
}

#[test]
fn truthiness_follows_the_value() {
    assert!(ValueHandle::from(3).is_true());
    assert!(!ValueHandle::from(0).is_true());
    assert!(ValueHandle::from("x").is_true());
    assert!(!ValueHandle::from("").is_true());
    assert!(ValueHandle::from(true).is_true());
    assert!(!ValueHandle::from(false).is_true());
    assert!(!ValueHandle::none().is_true());

    let class = Rc::new(Class::new("C".to_string(), vec![empty_method("f")], None).unwrap());
    let class_value = ValueHandle::owned(Value::Class(Rc::clone(&class)));
    let instance = ValueHandle::owned(Value::Instance(ClassInstance::new(class)));
    assert!(!class_value.is_true());
    assert!(!instance.is_true());
}

#[test]
fn borrowed_handles_do_not_own() {
    let owned = ValueHandle::from(1);
    let borrowed = owned.borrowed();

    let first = owned.get().expect("owner dereferences");
    let second = borrowed.get().expect("borrow dereferences while owner lives");
    assert!(Rc::ptr_eq(&first, &second));
    drop(first);
    drop(second);

    drop(owned);
    assert!(borrowed.get().is_none(), "borrow dangles once the owner is gone");
}

#[test]
fn fresh_instances_have_no_fields() {
    let class = Rc::new(Class::new("C".to_string(), vec![empty_method("f")], None).unwrap());
    let instance = ClassInstance::new(class);
    assert!(instance.fields().is_empty());
}

#[test]
fn duplicate_methods_are_rejected_at_construction() {
    let result = Class::new("C".to_string(),
                            vec![empty_method("f"), empty_method("f")],
                            None);

    let error = result.err().expect("duplicate methods must fail");
    let message = error.to_string();
    assert!(message.contains('C') && message.contains('f'), "got: {message}");
}

#[test]
fn method_lookup_walks_the_parent_chain() {
    let base = Rc::new(Class::new("B".to_string(),
                                  vec![empty_method("inherited"), empty_method("shared")],
                                  None).unwrap());
    let derived = Rc::new(Class::new("D".to_string(),
                                     vec![empty_method("own"), empty_method("shared")],
                                     Some(Rc::clone(&base))).unwrap());

    assert!(derived.parent().is_some());
    assert!(derived.has_method("own", 0));
    assert!(derived.has_method("inherited", 0));
    assert!(!base.has_method("own", 0));

    // The first match wins, so "shared" resolves to the derived table.
    let from_derived = derived.method("shared").expect("shared resolves");
    let from_base = base.method("shared").expect("shared resolves on the base");
    assert!(!std::ptr::eq(from_derived, from_base));

    // Arity is part of the check: the methods take no arguments.
    assert!(!derived.has_method("inherited", 1));
}

#[test]
fn equality_is_reflexive_for_plain_values() {
    let mut sink: Vec<u8> = Vec::new();
    let mut context = Context::new(&mut sink);

    for value in [ValueHandle::from(5),
                  ValueHandle::from(-5),
                  ValueHandle::from("text"),
                  ValueHandle::from(""),
                  ValueHandle::from(true),
                  ValueHandle::from(false),
                  ValueHandle::none()]
    {
        assert!(context.equal(&value, &value, 1).unwrap());
    }
}

#[test]
fn derived_comparators_follow_the_primitives() {
    let mut sink: Vec<u8> = Vec::new();
    let mut context = Context::new(&mut sink);

    let pairs = [(ValueHandle::from(1), ValueHandle::from(2)),
                 (ValueHandle::from(2), ValueHandle::from(2)),
                 (ValueHandle::from(3), ValueHandle::from(2)),
                 (ValueHandle::from("a"), ValueHandle::from("b")),
                 (ValueHandle::from(false), ValueHandle::from(true))];

    for (lhs, rhs) in &pairs {
        let equal = context.equal(lhs, rhs, 1).unwrap();
        let less = context.less(lhs, rhs, 1).unwrap();

        let not_equal = context.compare(Comparator::NotEqual, lhs, rhs, 1)
                               .unwrap()
                               .is_true();
        let greater_or_equal = context.compare(Comparator::GreaterOrEqual, lhs, rhs, 1)
                                      .unwrap()
                                      .is_true();
        let greater = context.compare(Comparator::Greater, lhs, rhs, 1)
                             .unwrap()
                             .is_true();

        assert_eq!(not_equal, !equal);
        assert_eq!(greater_or_equal, !less);
        assert_eq!(greater, !less && !equal);
    }
}

#[test]
fn rendering_matches_the_printed_form() {
    let mut sink: Vec<u8> = Vec::new();
    let mut context = Context::new(&mut sink);

    let cases = [(ValueHandle::from(42), "42"),
                 (ValueHandle::from(-1), "-1"),
                 (ValueHandle::from("raw text"), "raw text"),
                 (ValueHandle::from(true), "True"),
                 (ValueHandle::from(false), "False"),
                 (ValueHandle::none(), "None")];

    for (value, expected) in cases {
        assert_eq!(value.render(1, &mut context).unwrap(), expected);
    }

    let class = Rc::new(Class::new("C".to_string(), vec![empty_method("f")], None).unwrap());
    let class_value = ValueHandle::owned(Value::Class(class));
    assert_eq!(class_value.render(1, &mut context).unwrap(), "Class C");
}

#[test]
fn calling_methods_on_plain_values_fails() {
    let mut sink: Vec<u8> = Vec::new();
    let mut context = Context::new(&mut sink);

    let number = ValueHandle::from(1);
    assert!(number.call_method("f", vec![], 1, &mut context).is_err());
    assert!(ValueHandle::none().call_method("f", vec![], 1, &mut context)
                               .is_err());
}

#[test]
fn calling_missing_or_wrong_arity_methods_fails() {
    let mut sink: Vec<u8> = Vec::new();
    let mut context = Context::new(&mut sink);

    let class = Rc::new(Class::new("C".to_string(), vec![empty_method("f")], None).unwrap());
    let instance = ValueHandle::owned(Value::Instance(ClassInstance::new(class)));

    assert!(instance.call_method("missing", vec![], 1, &mut context).is_err());
    assert!(instance.call_method("f", vec![ValueHandle::from(1)], 1, &mut context)
                    .is_err());

    // A body without a return yields none.
    let result = instance.call_method("f", vec![], 1, &mut context).unwrap();
    assert!(result.get().is_none());
}
