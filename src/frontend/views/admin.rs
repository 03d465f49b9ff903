use leptos::prelude::*;

use crate::calendar::{self, CalendarCell, WEEKDAYS};
use crate::fixtures::{self, ADMIN_STATS, CATEGORY_DATA, CHART_COLORS, INSTRUCTORS, REVENUE_DATA};
use crate::frontend::components::{
    AreaChart, Badge, BadgeColor, Button, ButtonSize, ButtonVariant, Card, DonutChart,
};
use crate::frontend::pages::ViewNotFound;
use crate::models::{AdminView, Icon, ViewId};

#[component]
pub fn AdminViews(#[prop(into)] requested: Signal<ViewId>) -> impl IntoView {
    let panel = Memo::new(move |_| AdminView::from_view(requested.get()));

    move || match panel.get() {
        Some(AdminView::Analytics) => view! { <Analytics/> }.into_any(),
        Some(AdminView::Coordination) => view! { <Coordination/> }.into_any(),
        Some(AdminView::Evaluations) => view! { <Evaluations/> }.into_any(),
        Some(AdminView::Users) => view! { <Users/> }.into_any(),
        Some(AdminView::Settings) => view! {
            <div class="flex items-center justify-center h-96 text-[#86868B]">
                "Settings Panel Placeholder"
            </div>
        }
        .into_any(),
        None => view! { <ViewNotFound/> }.into_any(),
    }
}

#[component]
fn Analytics() -> impl IntoView {
    let stats = ADMIN_STATS
        .iter()
        .map(|stat| {
            view! {
                <Card class="p-6">
                    <p class="text-sm text-[#86868B] uppercase font-semibold mb-1">{stat.label()}</p>
                    <p class="text-3xl font-bold">{stat.value.clone()}</p>
                    <p class="text-xs text-green-500 mt-2 font-medium">"+12% from last month"</p>
                </Card>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"Overview"</h1>
                <div class="flex gap-2">
                    <select class="bg-white border border-[#E5E5EA] rounded-lg px-3 py-1 text-sm outline-none">
                        <option>"Last 7 Days"</option>
                        <option>"Last 30 Days"</option>
                        <option>"Year to Date"</option>
                    </select>
                    <Button size=ButtonSize::Sm variant=ButtonVariant::Outline>"Export"</Button>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">{stats}</div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <Card class="lg:col-span-2 p-6 min-h-[400px]">
                    <h3 class="font-bold mb-6">"Revenue Trend"</h3>
                    <div class="h-80">
                        <AreaChart points=REVENUE_DATA.as_slice()/>
                    </div>
                </Card>
                <Card class="p-6 min-h-[400px]">
                    <h3 class="font-bold mb-6">"Enrollment by Category"</h3>
                    <DonutChart points=CATEGORY_DATA.as_slice() palette=&CHART_COLORS/>
                </Card>
            </div>
        </div>
    }
}

fn calendar_cell(cell: CalendarCell) -> impl IntoView {
    let cell_class = if cell.in_month {
        "bg-white h-24 p-2 relative hover:bg-gray-50 transition-colors"
    } else {
        "bg-white h-24 p-2 relative hover:bg-gray-50 transition-colors text-gray-300"
    };
    let day_class = if cell.is_today {
        "block w-6 h-6 rounded-full flex items-center justify-center text-xs bg-[#0071E3] text-white"
    } else {
        "block w-6 h-6 rounded-full flex items-center justify-center text-xs"
    };

    view! {
        <div class=cell_class>
            <span class=day_class>{cell.day}</span>
            {cell.event.map(|event| view! {
                <div class=format!(
                    "mt-1 text-[10px] p-1 rounded truncate text-left {}",
                    event.tone.classes()
                )>
                    {event.title}
                </div>
            })}
        </div>
    }
}

#[component]
fn Coordination() -> impl IntoView {
    let weekdays = WEEKDAYS
        .iter()
        .map(|d| view! { <div class="bg-[#F5F5F7] py-2 font-semibold text-[#86868B]">{*d}</div> })
        .collect_view();
    let cells = calendar::month_grid().into_iter().map(calendar_cell).collect_view();

    let sessions = calendar::upcoming_sessions()
        .into_iter()
        .map(|session| {
            view! {
                <div class="flex gap-4 items-start p-3 rounded-xl hover:bg-[#F5F5F7] transition-colors border-l-4 border-[#0071E3]">
                    <div class="bg-gray-100 p-2 rounded-lg text-center min-w-[3rem]">
                        <span class="block text-xs font-bold text-[#86868B]">{session.month}</span>
                        <span class="block text-lg font-bold text-[#1D1D1F]">{session.day}</span>
                    </div>
                    <div>
                        <h4 class="font-bold text-sm">{session.title}</h4>
                        <div class="flex items-center gap-3 text-xs text-[#86868B] mt-1">
                            <span class="flex items-center gap-1">{Icon::Clock.glyph()} " " {session.time}</span>
                            <span class="flex items-center gap-1">"📍 " {session.room}</span>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"Class Schedule Coordination"</h1>
                <Button class="gap-2">{Icon::Calendar.glyph()} " Schedule New Class"</Button>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <Card class="lg:col-span-2 p-6">
                    <h3 class="font-bold mb-4">"Weekly Overview"</h3>
                    <div class="grid grid-cols-7 gap-px bg-[#E5E5EA] border border-[#E5E5EA] rounded-lg overflow-hidden text-center text-sm">
                        {weekdays}
                        {cells}
                    </div>
                </Card>

                <Card class="p-6">
                    <h3 class="font-bold mb-4">"Upcoming Sessions"</h3>
                    <div class="space-y-4">{sessions}</div>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn Evaluations() -> impl IntoView {
    let cards = INSTRUCTORS
        .iter()
        .map(|instructor| {
            view! {
                <Card class="p-6">
                    <div class="flex items-start justify-between mb-4">
                        <div class="w-16 h-16 rounded-full bg-gray-200 flex items-center justify-center text-xl font-bold text-gray-500">
                            {instructor.initials()}
                        </div>
                        <div class="flex items-center gap-1 bg-yellow-50 text-yellow-600 px-2 py-1 rounded-lg text-sm font-bold">
                            {Icon::Star.glyph()} " " {instructor.rating}
                        </div>
                    </div>
                    <h3 class="font-bold text-lg">{instructor.name.clone()}</h3>
                    <p class="text-sm text-[#86868B] mb-4">{instructor.department.clone()}</p>
                    <div class="flex justify-between items-center text-sm border-t border-[#E5E5EA] pt-4">
                        <span class="text-[#86868B]">{format!("{} Reviews", instructor.reviews)}</span>
                        <Button size=ButtonSize::Sm variant=ButtonVariant::Outline>"View Report"</Button>
                    </div>
                </Card>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">"Instructor Evaluations"</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
        </div>
    }
}

#[component]
fn Users() -> impl IntoView {
    let rows = (1..=5)
        .map(|i| {
            view! {
                <tr class="hover:bg-gray-50">
                    <td class="px-6 py-4 flex items-center gap-3">
                        <div class="w-8 h-8 rounded-full bg-gray-200"></div>
                        <div class="font-medium text-sm">{format!("User {i}")}</div>
                    </td>
                    <td class="px-6 py-4 text-sm text-[#86868B]">{fixtures::mock_user_role(i).title()}</td>
                    <td class="px-6 py-4">
                        <Badge color=BadgeColor::Green>"Active"</Badge>
                    </td>
                    <td class="px-6 py-4 text-sm text-[#86868B]">"Oct 24, 2023"</td>
                    <td class="px-6 py-4 text-right">
                        <button type="button" class="text-gray-400 hover:text-gray-600">"⋯"</button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"User Management"</h1>
                <div class="flex gap-2">
                    <input
                        placeholder="Search users..."
                        class="border border-[#E5E5EA] rounded-lg px-4 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-[#0071E3]"
                    />
                    <Button>"Add User"</Button>
                </div>
            </div>
            <Card class="overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-[#F5F5F7] text-[#86868B] text-xs uppercase font-semibold">
                        <tr>
                            <th class="px-6 py-4">"User"</th>
                            <th class="px-6 py-4">"Role"</th>
                            <th class="px-6 py-4">"Status"</th>
                            <th class="px-6 py-4">"Joined"</th>
                            <th class="px-6 py-4 text-right">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-[#E5E5EA]">{rows}</tbody>
                </table>
            </Card>
        </div>
    }
}
