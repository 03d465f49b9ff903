use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::prelude::*;

use crate::fixtures::{self, COURSE_CATEGORIES, MESSAGES};
use crate::frontend::components::{
    Badge, BadgeColor, Button, ButtonSize, ButtonVariant, Card, Modal, StatCard, Toast,
};
use crate::frontend::pages::ViewNotFound;
use crate::frontend::timers::ToastController;
use crate::inbox::Inbox;
use crate::models::{Icon, InstructorView, ViewId, initials};

#[component]
pub fn InstructorViews(#[prop(into)] requested: Signal<ViewId>) -> impl IntoView {
    let inbox = RwSignal::new(Inbox::new());
    let toast = ToastController::new();
    let panel = Memo::new(move |_| InstructorView::from_view(requested.get()));

    view! {
        {move || match panel.get() {
            Some(InstructorView::Dashboard) => view! { <Dashboard/> }.into_any(),
            Some(InstructorView::CourseManagement) => {
                view! { <CourseManagement toast=toast/> }.into_any()
            }
            Some(InstructorView::Grading) => view! { <Grading/> }.into_any(),
            Some(InstructorView::Communications) => {
                view! { <Communications inbox=inbox/> }.into_any()
            }
            None => view! { <ViewNotFound/> }.into_any(),
        }}
        <Toast state=toast.state()/>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let to_grade = (1..=3)
        .map(|i| {
            view! {
                <div class="flex items-center justify-between p-3 border border-[#E5E5EA] rounded-xl">
                    <div>
                        <p class="font-medium text-sm">{format!("Final Project - Student #{i}")}</p>
                        <p class="text-xs text-[#86868B]">"Submitted 2h ago"</p>
                    </div>
                    <Button size=ButtonSize::Sm variant=ButtonVariant::Outline>"Grade"</Button>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">"Instructor Dashboard"</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard icon=Icon::Users label="Total Students" value="1,245" tint="bg-blue-50 text-[#0071E3]"/>
                <StatCard icon=Icon::FileText label="Pending Grades" value="14" tint="bg-orange-50 text-orange-500"/>
                <StatCard icon=Icon::Check label="Courses Active" value="4" tint="bg-green-50 text-green-500"/>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Card class="p-6">
                    <h3 class="font-bold mb-4">"Assignments to Grade"</h3>
                    <div class="space-y-3">{to_grade}</div>
                </Card>

                <Card class="p-6 bg-gradient-to-br from-[#1D1D1F] to-[#424245] text-white">
                    <h3 class="font-bold mb-2">"Live Class Schedule"</h3>
                    <p class="opacity-70 text-sm mb-6">"Your next session starts in 45 minutes."</p>
                    <div class="p-4 bg-white/10 backdrop-blur rounded-xl border border-white/10">
                        <p class="font-bold">"Advanced Python Q&A"</p>
                        <p class="text-sm opacity-80">"10:00 AM - 11:30 AM"</p>
                    </div>
                    <Button class="mt-6 w-full bg-white text-black hover:bg-gray-200">"Start Session"</Button>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn CourseManagement(toast: ToastController) -> impl IntoView {
    let (create_open, set_create_open) = signal(false);

    let courses = fixtures::instructor_courses()
        .iter()
        .map(|course| {
            view! {
                <Card class="p-4 flex flex-col md:flex-row gap-4 items-center">
                    <img src=course.image.clone() alt=course.title.clone() class="w-full md:w-32 h-20 object-cover rounded-lg"/>
                    <div class="flex-1">
                        <h3 class="font-bold text-lg">{course.title.clone()}</h3>
                        <div class="flex gap-4 text-xs text-[#86868B] mt-1">
                            <span>{course.category.clone()}</span>
                            <span>{course.price.clone()}</span>
                            <span>{format!("{} Rating", course.rating)}</span>
                        </div>
                    </div>
                    <div class="flex gap-2 w-full md:w-auto">
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class="flex-1 md:flex-none">"Edit"</Button>
                        <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class="flex-1 md:flex-none">"Analytics"</Button>
                    </div>
                </Card>
            }
        })
        .collect_view();

    let publish = move |_: MouseEvent| {
        set_create_open.set(false);
        toast.show("Course Created Successfully");
    };

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"My Courses"</h1>
                <Button class="gap-2" on:click=move |_| set_create_open.set(true)>
                    {Icon::Plus.glyph()}
                    " Create New"
                </Button>
            </div>

            <div class="grid grid-cols-1 gap-4">{courses}</div>

            <Modal open=create_open on_close=move |_| set_create_open.set(false) title="Create New Course">
                <div class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium mb-1">"Course Title"</label>
                        <input
                            type="text"
                            class="w-full p-2 rounded-lg border border-[#E5E5EA] focus:outline-none focus:ring-2 focus:ring-[#0071E3]"
                            placeholder="e.g. Intro to AI"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium mb-1">"Category"</label>
                        <select class="w-full p-2 rounded-lg border border-[#E5E5EA]">
                            {COURSE_CATEGORIES.iter().map(|c| view! { <option>{*c}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="border-2 border-dashed border-[#E5E5EA] rounded-xl p-8 text-center bg-gray-50 cursor-pointer hover:bg-gray-100 transition-colors">
                        <div class="text-3xl text-gray-400 mb-2">{Icon::Upload.glyph()}</div>
                        <p class="text-sm font-medium text-gray-600">"Drag and drop course content here"</p>
                        <p class="text-xs text-gray-400">"Video, PDF, or Slides"</p>
                    </div>
                    <Button class="w-full" on:click=publish>"Publish Course"</Button>
                </div>
            </Modal>
        </div>
    }
}

#[component]
fn Grading() -> impl IntoView {
    let rows = (1..=4)
        .map(|i| {
            let (color, status) = if i % 2 == 0 {
                (BadgeColor::Green, "Graded")
            } else {
                (BadgeColor::Yellow, "Pending")
            };
            view! {
                <tr class="hover:bg-gray-50">
                    <td class="px-6 py-4 font-medium text-sm">{format!("Student Name #{i}")}</td>
                    <td class="px-6 py-4 text-sm text-[#86868B]">"Module 3 Assessment"</td>
                    <td class="px-6 py-4">
                        <Badge color=color>{status}</Badge>
                    </td>
                    <td class="px-6 py-4">
                        <Button size=ButtonSize::Sm variant=ButtonVariant::Ghost>"Open"</Button>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">"Grading Portal"</h1>
            <Card class="overflow-hidden">
                <table class="w-full text-left">
                    <thead class="bg-[#F5F5F7] text-[#86868B] text-xs uppercase font-semibold">
                        <tr>
                            <th class="px-6 py-4">"Student"</th>
                            <th class="px-6 py-4">"Assignment"</th>
                            <th class="px-6 py-4">"Status"</th>
                            <th class="px-6 py-4">"Action"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-[#E5E5EA]">{rows}</tbody>
                </table>
            </Card>
        </div>
    }
}

#[component]
fn Communications(inbox: RwSignal<Inbox>) -> impl IntoView {
    let contacts = MESSAGES
        .iter()
        .map(|msg| {
            let id = msg.id;
            let selected = move || inbox.with(|i| i.selected_id() == id);
            view! {
                <div
                    class=move || {
                        if selected() {
                            "p-4 hover:bg-gray-50 cursor-pointer border-b border-[#E5E5EA] bg-blue-50/50"
                        } else {
                            "p-4 hover:bg-gray-50 cursor-pointer border-b border-[#E5E5EA]"
                        }
                    }
                    on:click=move |_| inbox.update(|i| i.select(id))
                >
                    <div class="flex justify-between items-start mb-1">
                        <span class="font-bold text-sm">{msg.student.clone()}</span>
                        <span class="text-xs text-[#86868B]">{msg.time.clone()}</span>
                    </div>
                    <p class="text-sm text-[#86868B] line-clamp-1">{msg.message.clone()}</p>
                    {msg.unread.then(|| view! {
                        <span class="inline-block w-2 h-2 bg-blue-500 rounded-full mt-2"></span>
                    })}
                </div>
            }
        })
        .collect_view();

    let contact_name = move || {
        inbox.with(|i| i.selected_contact().map(|m| m.student.clone()).unwrap_or_default())
    };

    let transcript = move || {
        inbox
            .with(Inbox::transcript)
            .into_iter()
            .map(|line| {
                if line.from_instructor {
                    view! {
                        <div class="flex justify-end">
                            <div class="bg-[#0071E3] text-white px-4 py-2 rounded-2xl rounded-tr-sm max-w-sm text-sm">
                                {line.text}
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="flex justify-start">
                            <div class="bg-white border border-[#E5E5EA] text-[#1D1D1F] px-4 py-2 rounded-2xl rounded-tl-sm max-w-sm text-sm shadow-sm">
                                {line.text}
                            </div>
                        </div>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    let send = move || {
        inbox.update(|i| {
            i.send();
        });
    };

    view! {
        <div class="h-[calc(100vh-8rem)] flex gap-6">
            <Card class="w-full md:w-80 flex flex-col overflow-hidden">
                <div class="p-4 border-b border-[#E5E5EA]">
                    <h2 class="font-bold text-lg">"Messages"</h2>
                </div>
                <div class="flex-1 overflow-y-auto">{contacts}</div>
            </Card>

            <Card class="flex-1 flex-col overflow-hidden hidden md:flex">
                <div class="p-4 border-b border-[#E5E5EA] flex justify-between items-center bg-[#F5F5F7]/50">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 rounded-full bg-gray-200 flex items-center justify-center font-bold text-gray-500">
                            {move || initials(&contact_name())}
                        </div>
                        <div>
                            <h3 class="font-bold">{contact_name}</h3>
                            <p class="text-xs text-[#86868B]">"Online"</p>
                        </div>
                    </div>
                </div>

                <div class="flex-1 bg-[#F5F5F7]/30 p-6 space-y-4 overflow-y-auto">{transcript}</div>

                <div class="p-4 border-t border-[#E5E5EA] flex gap-2">
                    <input
                        type="text"
                        class="flex-1 bg-[#F5F5F7] rounded-full px-4 focus:outline-none focus:ring-2 focus:ring-[#0071E3]/20"
                        placeholder="Type a message..."
                        prop:value=move || inbox.with(|i| i.draft().to_string())
                        on:input=move |ev| inbox.update(|i| i.set_draft(event_target_value(&ev)))
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <Button
                        class="rounded-full w-10 h-10 p-0 flex items-center justify-center"
                        on:click=move |_| send()
                    >
                        {Icon::Send.glyph()}
                    </Button>
                </div>
            </Card>
        </div>
    }
}
