use super::view_model::ReportGeneratorViewModel;
use crate::shared::components::{DateRangePicker, PageHeader};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::domain::a025_sales_report::SalesReport;
use contracts::enums::ReportTemplate;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn GenerateReportPage() -> impl IntoView {
    let vm = ReportGeneratorViewModel::new();
    let state = vm.state;
    vm.load_command();

    let template_code = RwSignal::new(ReportTemplate::default().code().to_string());
    Effect::new(move |_| {
        let code = template_code.get();
        vm.set_template(&code);
    });

    let on_range_change = Callback::new(move |(from, to): (String, String)| {
        vm.set_range(from, to);
    });
    let from_date = Signal::derive(move || state.with(|s| s.from_date.clone()));
    let to_date = Signal::derive(move || state.with(|s| s.to_date.clone()));
    let loading = Signal::derive(move || state.with(|s| s.loading));

    let template_options = ReportTemplate::all()
        .into_iter()
        .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
        .collect_view();

    view! {
        <PageFrame page_id="a025_sales_report--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title="Generate Report" icon_name="report" />

            <div class="page__content">
                <div class="card">
                    <div class="dashboard-grid">
                        <div class="form-group">
                            <Label>"Report Template"</Label>
                            <Select value=template_code>{template_options}</Select>
                        </div>
                        <div>
                            <h2 class="card__title">"Report Parameters"</h2>
                            <DateRangePicker
                                date_from=from_date
                                date_to=to_date
                                on_change=on_range_change
                                labels=("From", "To")
                                ids=("fromDate", "toDate")
                            />
                            {move || state.with(|s| s.error.clone()).map(|e| view! {
                                <div class="error">{e}</div>
                            })}
                        </div>
                    </div>
                    <Flex justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                vm.clear_command();
                                template_code.set(ReportTemplate::default().code().to_string());
                            }
                        >
                            "Clear"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            loading=loading
                            disabled=loading
                            on_click=move |_| vm.generate_command()
                        >
                            "Generate"
                        </Button>
                    </Flex>
                </div>

                <h2 class="section-title">"Generated Reports"</h2>
                <div class="card">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Report ID"</TableHeaderCell>
                                <TableHeaderCell>"Report Name"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Created by"</TableHeaderCell>
                                <TableHeaderCell>"Action"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || state.with(|s| s.reports.clone())
                                key=|r| r.report_id
                                children=move |report: SalesReport| {
                                    let report_id = report.report_id;
                                    view! {
                                        <TableRow>
                                            <TableCell>{report.report_id}</TableCell>
                                            <TableCell>{report.report_name}</TableCell>
                                            <TableCell>{report.description}</TableCell>
                                            <TableCell>{report.created_date}</TableCell>
                                            <TableCell>{report.created_by}</TableCell>
                                            <TableCell>
                                                <Button
                                                    size=ButtonSize::Small
                                                    on_click=move |_| vm.delete_command(report_id)
                                                >
                                                    {icon("trash")}
                                                    " Delete"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || state.with(|s| s.reports.is_empty()).then(|| view! {
                        <p class="table-empty">"No reports generated yet"</p>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
