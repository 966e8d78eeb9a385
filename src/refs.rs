use pdf_writer::Ref;
use std::collections::HashMap;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    PageTree,
    Page,
    Content,
}

/// Hands out sequential object ids and remembers which object each one is for.
/// Ids start at 1; 0 is reserved by the PDF cross-reference table.
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    /// The id for `ref_type`, allocated the first time it is asked for
    pub fn id(&mut self, ref_type: RefType) -> Ref {
        if let Some(id) = self.refs.get(&ref_type) {
            return *id;
        }
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }
}
