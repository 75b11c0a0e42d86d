//! Activation records and the call stack.

use rustc_hash::FxHashMap;

use crate::Value;

/// What kind of body a frame belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FrameKind {
    Program,
    Function,
    Procedure,
}

/// One call's private variable storage.
///
/// Frames never chain: identifier lookup reads the current frame only. A
/// callee frame starts as a copy of the caller's members with the parameters
/// bound over them, which is what makes caller bindings visible inside a
/// call without any parent-pointer walking.
#[derive(Clone, Debug)]
pub struct ActivationRecord {
    pub name: String,
    pub kind: FrameKind,
    pub level: u32,
    members: FxHashMap<String, Value>,
}

impl ActivationRecord {
    pub fn new(name: impl Into<String>, kind: FrameKind, level: u32) -> Self {
        ActivationRecord {
            name: name.into(),
            kind,
            level,
            members: FxHashMap::default(),
        }
    }

    /// A frame one level deeper, seeded with a copy of this frame's members.
    pub fn seeded_child(&self, name: impl Into<String>, kind: FrameKind) -> Self {
        ActivationRecord {
            name: name.into(),
            kind,
            level: self.level + 1,
            members: self.members.clone(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.members.insert(name.into(), value);
    }
}

/// Strict LIFO stack of activation records.
///
/// Pushes and pops always balance: callers pop the frame they pushed before
/// propagating any error or control signal.
#[derive(Default, Debug)]
pub struct CallStack {
    records: Vec<ActivationRecord>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack::default()
    }

    pub fn push(&mut self, record: ActivationRecord) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<ActivationRecord> {
        self.records.pop()
    }

    pub fn depth(&self) -> usize {
        self.records.len()
    }

    /// The current frame.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty; the interpreter pushes the program
    /// frame before executing anything.
    pub fn current(&self) -> &ActivationRecord {
        match self.records.last() {
            Some(record) => record,
            None => panic!("call stack is empty"),
        }
    }

    /// The current frame, mutably.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty.
    pub fn current_mut(&mut self) -> &mut ActivationRecord {
        match self.records.last_mut() {
            Some(record) => record,
            None => panic!("call stack is empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_child_copies_members_and_binds_over() {
        let mut caller = ActivationRecord::new("main", FrameKind::Program, 1);
        caller.set("x", Value::Int(1));
        caller.set("n", Value::Int(9));

        let mut callee = caller.seeded_child("f", FrameKind::Function);
        callee.set("n", Value::Int(2)); // parameter binding overwrites

        assert_eq!(callee.level, 2);
        assert_eq!(callee.get("x"), Some(&Value::Int(1)));
        assert_eq!(callee.get("n"), Some(&Value::Int(2)));
        // The caller keeps its own binding.
        assert_eq!(caller.get("n"), Some(&Value::Int(9)));
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = CallStack::new();
        stack.push(ActivationRecord::new("main", FrameKind::Program, 1));
        stack.push(ActivationRecord::new("p", FrameKind::Procedure, 2));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current().name, "p");
        let popped = stack.pop();
        assert!(matches!(popped, Some(record) if record.name == "p"));
        assert_eq!(stack.current().name, "main");
    }
}
