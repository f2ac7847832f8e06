//! # Presenter
//!
//! Subscribes the views and the state to the bus. Every handler captures
//! clones of the components it touches.
//!
//! State mutations emit while the state is locked, so handlers for
//! state-driven events (`items:changed`, `basket:changed`,
//! `formErrors:change`, `preview:changed`) only read their payload and never
//! lock the state. `modal:*` handlers run while the modal is locked and only
//! touch the page.

use super::context::{lock, AppContext};
use crate::shop::events::{AppEvent, FormId};
use crate::shop::services::ApiRequest;
use crate::shop::views::{CardView, ModalContent};

/// Connect every handler to the context's bus
pub fn wire(ctx: &AppContext) {
    wire_catalog(ctx);
    wire_preview(ctx);
    wire_basket(ctx);
    wire_order(ctx);
    wire_modal(ctx);
    tracing::debug!("Presenter wired {} handler(s)", ctx.events.subscriber_count());
}

fn wire_catalog(ctx: &AppContext) {
    let page = ctx.page.clone();
    ctx.events.on("items:changed", move |event| {
        if let AppEvent::ItemsChanged { catalog } = event {
            lock(&page).set_catalog(catalog.clone());
        }
    });

    let state = ctx.state.clone();
    ctx.events.on("card:select", move |event| {
        if let AppEvent::CardSelect { product } = event {
            lock(&state).set_preview(product.clone());
        }
    });
}

fn wire_preview(ctx: &AppContext) {
    let api = ctx.api.clone();
    let modal = ctx.modal.clone();
    ctx.events.on("preview:changed", move |event| {
        if let AppEvent::PreviewChanged { product } = event {
            match product {
                Some(product) => api.dispatch(ApiRequest::Product {
                    id: product.id.clone(),
                }),
                None => lock(&modal).close(),
            }
        }
    });

    let preview = ctx.preview.clone();
    let modal = ctx.modal.clone();
    ctx.events.on("preview:ready", move |event| {
        if let AppEvent::PreviewReady { product, in_basket } = event {
            *lock(&preview) = Some(CardView::preview(product.clone(), *in_basket));
            lock(&modal).render(ModalContent::Preview);
        }
    });
}

fn wire_basket(ctx: &AppContext) {
    let modal = ctx.modal.clone();
    ctx.events.on("basket:open", move |_| {
        lock(&modal).render(ModalContent::Basket);
    });

    let state = ctx.state.clone();
    let modal = ctx.modal.clone();
    ctx.events.on("basket:add", move |event| {
        if let AppEvent::BasketAdd { product } = event {
            let outcome = lock(&state).add_to_basket(product.clone());
            tracing::debug!("basket:add '{}' -> {:?}", product.id, outcome);
            lock(&modal).close();
        }
    });

    let state = ctx.state.clone();
    ctx.events.on("basket:delete-card", move |event| {
        if let AppEvent::BasketDeleteCard { id } = event {
            lock(&state).remove_from_basket(id);
        }
    });

    let basket = ctx.basket.clone();
    let page = ctx.page.clone();
    ctx.events.on("basket:changed", move |event| {
        if let AppEvent::BasketChanged { items, total } = event {
            {
                let mut basket = lock(&basket);
                basket.set_items(items.clone());
                basket.set_total(*total);
            }
            lock(&page).set_counter(items.len());
        }
    });

    let basket = ctx.basket.clone();
    ctx.events.on("basket:item-removed", move |event| {
        if let AppEvent::BasketItemRemoved { id } = event {
            lock(&basket).remove_item(id);
        }
    });
}

/// Load a checkout step from the current draft, then show it
fn open_step(ctx: &AppContext, event: &'static str, form: FormId, content: ModalContent) {
    let state = ctx.state.clone();
    let view = match form {
        FormId::Order => ctx.order_form.clone(),
        FormId::Contacts => ctx.contacts_form.clone(),
    };
    let modal = ctx.modal.clone();
    ctx.events.on(event, move |_| {
        let (draft, total) = {
            let state = lock(&state);
            (state.order().clone(), state.total())
        };
        {
            let mut view = lock(&view);
            view.sync(&draft);
            if form == FormId::Contacts && total == 0 {
                view.set_valid(false);
            }
        }
        lock(&modal).render(content);
    });
}

fn wire_order(ctx: &AppContext) {
    open_step(ctx, "order:open", FormId::Order, ModalContent::Order);

    let state = ctx.state.clone();
    ctx.events.on("form:field-changed", move |event| {
        if let AppEvent::FieldChanged(change) = event {
            lock(&state).set_order_field(change.field, &change.value);
        }
    });

    // Paying also needs something in the basket
    let order_form = ctx.order_form.clone();
    let contacts_form = ctx.contacts_form.clone();
    let basket = ctx.basket.clone();
    ctx.events.on("formErrors:change", move |event| {
        if let AppEvent::FormErrorsChanged { errors } = event {
            let has_items = lock(&basket).total() > 0;
            for (form, view) in [(FormId::Order, &order_form), (FormId::Contacts, &contacts_form)]
            {
                let ready = form == FormId::Order || has_items;
                let mut view = lock(view);
                view.set_valid(ready && errors.is_form_valid(form));
                view.set_errors(errors.messages_for(form));
            }
        }
    });

    open_step(ctx, "contacts:open", FormId::Contacts, ModalContent::Contacts);

    let state = ctx.state.clone();
    let api = ctx.api.clone();
    ctx.events.on("contacts:submit", move |_| {
        let request = lock(&state).order_request();
        match request {
            Ok(order) => api.dispatch(ApiRequest::Order(order)),
            Err(e) => tracing::warn!("Order not submitted: {}", e),
        }
    });

    let success = ctx.success.clone();
    let modal = ctx.modal.clone();
    ctx.events.on("order:success", move |event| {
        if let AppEvent::OrderSuccess { result } = event {
            lock(&success).set_total(result.total);
            lock(&modal).render(ModalContent::Success);
        }
    });

    let modal = ctx.modal.clone();
    let order_form = ctx.order_form.clone();
    let contacts_form = ctx.contacts_form.clone();
    ctx.events.on("success:close", move |_| {
        lock(&modal).close();
        lock(&order_form).reset();
        lock(&contacts_form).reset();
    });
}

fn wire_modal(ctx: &AppContext) {
    let page = ctx.page.clone();
    ctx.events.on("modal:open", move |_| {
        lock(&page).set_locked(true);
    });

    let page = ctx.page.clone();
    ctx.events.on("modal:close", move |_| {
        lock(&page).set_locked(false);
    });
}
