use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::animation::{FrameLoop, MagneticMotion};
use crate::theme::prefers_reduced_motion;

#[derive(Properties, PartialEq)]
pub struct MagneticProps {
    #[prop_or(10.0)]
    pub strength: f64,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that leans its children toward the pointer.
#[function_component(Magnetic)]
pub fn magnetic(props: &MagneticProps) -> Html {
    let node = use_node_ref();

    use_effect_with_deps(
        move |(node, strength): &(NodeRef, f64)| {
            let binding = node
                .cast::<HtmlElement>()
                .filter(|_| !prefers_reduced_motion())
                .map(|element| MagneticBinding::attach(element, *strength));
            move || drop(binding)
        },
        (node.clone(), props.strength),
    );

    html! {
        <span ref={node} class={classes!("magnetic", props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}

/// Listeners and frame loop for one wrapped element; detaches on drop.
struct MagneticBinding {
    element: HtmlElement,
    frames: Rc<FrameLoop>,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    on_leave: Closure<dyn FnMut(MouseEvent)>,
}

impl MagneticBinding {
    fn attach(element: HtmlElement, strength: f64) -> Self {
        let motion = Rc::new(RefCell::new(MagneticMotion::default()));

        let frames = {
            let motion = motion.clone();
            let element = element.clone();
            Rc::new(FrameLoop::new(move |_| {
                let mut motion = motion.borrow_mut();
                let moving = motion.step();
                let _ = element.style().set_property("transform", &motion.transform());
                moving
            }))
        };

        let on_move = {
            let motion = motion.clone();
            let frames = frames.clone();
            let element = element.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let rect = element.get_bounding_client_rect();
                motion.borrow_mut().aim(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    (rect.left(), rect.top(), rect.width(), rect.height()),
                    strength,
                );
                frames.start();
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let on_leave = {
            let frames = frames.clone();
            Closure::wrap(Box::new(move |_: MouseEvent| {
                motion.borrow_mut().release();
                frames.start();
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        for (event, callback) in [("mousemove", &on_move), ("mouseleave", &on_leave)] {
            if let Err(err) =
                element.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                warn!("magnetic: could not listen for {}: {:?}", event, err);
            }
        }

        Self {
            element,
            frames,
            on_move,
            on_leave,
        }
    }
}

impl Drop for MagneticBinding {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        let _ = self
            .element
            .remove_event_listener_with_callback("mouseleave", self.on_leave.as_ref().unchecked_ref());
        self.frames.stop();
    }
}
