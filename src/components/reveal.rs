use yew::prelude::*;

use crate::hooks::use_in_view;

const STAGGER_MS: usize = 80;
const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Position within its group; later items start later.
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

pub fn stagger_delay(index: usize) -> String {
    format!("transition-delay: {}ms;", 40 + index * STAGGER_MS)
}

/// Fades its children up the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), REVEAL_THRESHOLD);

    html! {
        <div
            ref={node}
            class={classes!("reveal", shown.then_some("shown"), props.class.clone())}
            style={stagger_delay(props.index)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_with_index() {
        assert_eq!(stagger_delay(0), "transition-delay: 40ms;");
        assert_eq!(stagger_delay(3), "transition-delay: 280ms;");
    }
}
