use super::*;
use crate::net::types::ShippingAddress;

fn appointment(status: AppointmentStatus) -> Appointment {
    Appointment {
        id: "a".into(),
        customer_id: None,
        customer_name: None,
        service: "Welding".into(),
        date: "2026-11-02".into(),
        time: "09:00".into(),
        notes: None,
        status,
    }
}

fn quotation(status: QuotationStatus) -> Quotation {
    Quotation {
        id: "q".into(),
        customer_name: None,
        title: "Rail".into(),
        description: String::new(),
        attachments: Vec::new(),
        status,
        price_cents: None,
        admin_notes: None,
        created_at: None,
    }
}

fn order(status: OrderStatus) -> Order {
    Order {
        id: "o".into(),
        customer_name: None,
        items: Vec::new(),
        subtotal_cents: 0,
        tax_cents: 0,
        shipping_cents: 0,
        total_cents: 0,
        status,
        shipping: ShippingAddress::default(),
        created_at: None,
    }
}

#[test]
fn attention_counts_only_actionable_records() {
    let counts = attention(
        &[
            appointment(AppointmentStatus::Pending),
            appointment(AppointmentStatus::Confirmed),
            appointment(AppointmentStatus::Cancelled),
        ],
        &[quotation(QuotationStatus::Quoted), quotation(QuotationStatus::Pending)],
        &[order(OrderStatus::Shipped), order(OrderStatus::Delivered), order(OrderStatus::Cancelled)],
    );
    assert_eq!(counts, Attention { upcoming_appointments: 2, quotes_to_answer: 1, open_orders: 1 });
}

#[test]
fn attention_is_zero_without_data() {
    assert_eq!(attention(&[], &[], &[]), Attention::default());
}
