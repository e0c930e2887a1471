/// Document abstraction and the card initializer run on content load.
mod lifecycle;

use tracing::{debug, trace};

use crate::color::{self, ChannelSource};

pub use lifecycle::{Host, ReadyState};

/// Class marker selecting the elements that get a random background.
pub const CARD_CLASS: &str = "card";

/// The slice of a host document the initializer depends on.
pub trait Document {
    /// Opaque reference to one element of the document.
    type Handle: Copy;

    /// Elements carrying `class`, in document order.
    fn elements_by_class_name(&self, class: &str) -> Vec<Self::Handle>;

    /// Write `color` into the element's background-color style.
    fn set_background_color(&mut self, element: Self::Handle, color: &str);
}

/// Give every element carrying `class` its own random background color.
///
/// The matching collection is captured once before the first write, so
/// elements appearing or disappearing during the pass do not change it.
/// Returns how many elements were colored.
pub fn init_cards<D, S>(document: &mut D, class: &str, source: &mut S) -> usize
where
    D: Document + ?Sized,
    S: ChannelSource + ?Sized,
{
    let cards = document.elements_by_class_name(class);
    for &card in &cards {
        let color = color::random_color(source);
        trace!(%color, "coloring element");
        document.set_background_color(card, &color);
    }
    debug!(class, count = cards.len(), "assigned card colors");
    cards.len()
}
