use pdf_writer::Ref;
use std::collections::HashMap;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub(crate) enum RefType {
    Catalog,
    Info,
    PageTree,
    Font,
    Page(usize),
    ContentForPage(usize),
}

/// Hands out PDF object ids and remembers which object each one belongs to
pub(crate) struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub(crate) fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    /// Allocate a fresh id for `ref_type`
    pub(crate) fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }

    pub(crate) fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    /// The id already allocated for `ref_type`, or a new one
    pub(crate) fn get_or_gen(&mut self, ref_type: RefType) -> Ref {
        match self.get(ref_type) {
            Some(id) => id,
            None => self.gen(ref_type),
        }
    }
}
