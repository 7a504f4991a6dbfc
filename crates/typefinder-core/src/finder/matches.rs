//! Lazy enumeration of matching types.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::descriptor::{Module, TypeDescriptor};
use crate::rule::{Rule, RuleChain};

/// Iterator over the types of a query, in module order and then in
/// declaration order.
///
/// Each module's types are requested once per pass, when the iterator reaches
/// that module. Dropping the iterator stops the pass.
pub struct Matches<'a, M: Module> {
    modules: Arc<[&'a M]>,
    chain: Option<Arc<RuleChain>>,
    next_module: usize,
    current: Option<&'a M>,
    types: slice::Iter<'a, M::Type>,
    scanned: usize,
    matched: usize,
}

impl<'a, M: Module> Matches<'a, M> {
    pub(super) fn new(modules: Arc<[&'a M]>, chain: Option<Arc<RuleChain>>) -> Self {
        Matches {
            modules,
            chain,
            next_module: 0,
            current: None,
            types: Default::default(),
            scanned: 0,
            matched: 0,
        }
    }

    fn accepts(&self, ty: &M::Type) -> bool {
        self.chain.as_ref().map_or(true, |c| c.complies(ty))
    }

    // Returns false once every module has been visited.
    fn advance_module(&mut self) -> bool {
        if let Some(module) = self.current.take() {
            debug!(
                event = "module_scanned",
                module = module.name(),
                scanned = self.scanned,
                matched = self.matched,
            );
        }
        let Some(&module) = self.modules.get(self.next_module) else {
            return false;
        };
        self.next_module += 1;
        self.current = Some(module);
        self.types = module.declared_types().iter();
        self.scanned = 0;
        self.matched = 0;
        true
    }
}

impl<'a, M: Module> Iterator for Matches<'a, M> {
    type Item = &'a M::Type;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.types.next() {
                Some(ty) => {
                    self.scanned += 1;
                    if self.accepts(ty) {
                        self.matched += 1;
                        trace!(event = "type_matched", type_name = ty.name());
                        return Some(ty);
                    }
                }
                None => {
                    if !self.advance_module() {
                        return None;
                    }
                }
            }
        }
    }
}

impl<M: Module> FusedIterator for Matches<'_, M> {}

impl<M: Module> fmt::Debug for Matches<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matches")
            .field("modules", &self.modules.len())
            .field("next_module", &self.next_module)
            .field("scanned", &self.scanned)
            .field("matched", &self.matched)
            .finish()
    }
}
