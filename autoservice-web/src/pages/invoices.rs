use crate::{
    components::status_badge::InvoiceStatusBadge, containers::page_content::PageContent,
    hooks::use_remote, routes::MainRoute,
};
use chrono::Local;
use i18nrs::yew::use_translation;
use shared::models::Invoice;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Total still owed across payable invoices, in minor units.
pub(crate) fn outstanding_cents(invoices: &[Invoice]) -> i64 {
    invoices
        .iter()
        .filter(|invoice| invoice.status.is_payable())
        .map(|invoice| invoice.amount_cents)
        .sum()
}

#[function_component(InvoicesPage)]
pub fn invoices_page() -> Html {
    let (i18n, _) = use_translation();
    let invoices = use_remote(0, |client| async move { client.list_invoices().await });

    html! {
        <PageContent title={i18n.t("routes.invoices")}>
            { invoices.view(|invoices| if invoices.is_empty() {
                html! { <p class="opacity-70">{ i18n.t("invoices.empty") }</p> }
            } else {
                let currency = invoices
                    .first()
                    .map_or(shared::models::DEFAULT_CURRENCY, |invoice| invoice.currency.as_str());
                html! {
                    <>
                        <p class="mb-4">
                            { i18n.t("invoices.outstanding") }{": "}
                            <span class="font-semibold">
                                { shared::models::format_money(outstanding_cents(invoices), currency) }
                            </span>
                        </p>
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{ i18n.t("fields.issued_at") }</th>
                                        <th>{ i18n.t("fields.amount") }</th>
                                        <th>{ i18n.t("fields.status") }</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for invoices.iter().map(|invoice| html! {
                                        <tr key={invoice.id.to_string()}>
                                            <td>{ invoice.issued_at.display_in(&Local) }</td>
                                            <td>{ invoice.amount_display() }</td>
                                            <td><InvoiceStatusBadge status={invoice.status} /></td>
                                            <td>
                                                if invoice.status.is_payable() {
                                                    <Link<MainRoute>
                                                        to={MainRoute::Checkout { invoice_id: invoice.id.to_string() }}
                                                        classes="btn btn-primary btn-sm">
                                                        { i18n.t("invoices.pay") }
                                                    </Link<MainRoute>>
                                                }
                                            </td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    </>
                }
            }) }
        </PageContent>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::{InvoiceStatus, Timestamp};
    use uuid::Uuid;

    fn invoice(amount_cents: i64, status: InvoiceStatus) -> Invoice {
        Invoice {
            id: Uuid::new_v4(),
            appointment_id: None,
            customer_id: Uuid::nil(),
            amount_cents,
            currency: "USD".to_string(),
            status,
            issued_at: Timestamp(Utc.with_ymd_and_hms(2025, 2, 1, 10, 0, 0).unwrap()),
        }
    }

    #[test]
    fn outstanding_ignores_settled_invoices() {
        let invoices = [
            invoice(12_000, InvoiceStatus::Open),
            invoice(3_050, InvoiceStatus::Open),
            invoice(9_999, InvoiceStatus::Paid),
            invoice(500, InvoiceStatus::Void),
        ];
        assert_eq!(outstanding_cents(&invoices), 15_050);
    }
}
