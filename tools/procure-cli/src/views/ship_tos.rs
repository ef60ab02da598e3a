use procure_commerce::ShipTo;

use crate::messages;
use crate::output::Output;

const WIDTHS: [usize; 4] = [12, 16, 32, 14];

pub fn render_ship_tos(output: &Output, ship_tos: &[ShipTo]) {
    if output.is_json() {
        output.json(&ship_tos);
        return;
    }

    if ship_tos.is_empty() {
        output.info(messages::NO_SHIP_TOS);
        return;
    }

    output.table_row(&["ID", "名称", "住所", "電話"], &WIDTHS);
    output.table_rule(&WIDTHS);
    for ship_to in ship_tos {
        output.table_row(
            &[
                &ship_to.id.short(10),
                &ship_to.label,
                &ship_to.address,
                ship_to.phone.as_deref().unwrap_or("-"),
            ],
            &WIDTHS,
        );
    }
}
