use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::enrollment::Enrollment;
use crate::fixtures::{self, CATALOG_FILTERS, COURSES, SKILLS, STUDY_ACTIVITY};
use crate::frontend::components::{
    Badge, BadgeColor, Button, ButtonSize, ButtonVariant, Card, LineChart, Modal, ProgressBar,
    Toast,
};
use crate::frontend::pages::ViewNotFound;
use crate::frontend::timers::ToastController;
use crate::models::{AssessmentKind, AssessmentStatus, Course, Icon, StudentView, ViewId};

#[component]
pub fn StudentViews(#[prop(into)] requested: Signal<ViewId>) -> impl IntoView {
    let enrollment = RwSignal::new(Enrollment::default());
    let toast = ToastController::new();
    let panel = Memo::new(move |_| StudentView::from_view(requested.get()));

    view! {
        {move || match panel.get() {
            Some(StudentView::Dashboard) => view! { <Dashboard enrollment=enrollment/> }.into_any(),
            Some(StudentView::Catalog) => {
                view! { <Catalog enrollment=enrollment toast=toast/> }.into_any()
            }
            Some(StudentView::CoursePlayer) => view! { <CoursePlayer/> }.into_any(),
            Some(StudentView::Assessments) => view! { <Assessments toast=toast/> }.into_any(),
            Some(StudentView::Profile) => view! { <Profile toast=toast/> }.into_any(),
            None => view! { <ViewNotFound/> }.into_any(),
        }}
        <Toast state=toast.state()/>
    }
}

fn enrolled_card(course: Course) -> impl IntoView {
    view! {
        <Card class="flex flex-col h-full">
            <div class="h-32 bg-gray-200 relative">
                <img src=course.image.clone() alt=course.title.clone() class="w-full h-full object-cover"/>
                <div class="absolute bottom-2 right-2 bg-white/90 backdrop-blur px-2 py-1 rounded-md text-xs font-bold shadow-sm">
                    {course.category.clone()}
                </div>
            </div>
            <div class="p-5 flex-1 flex flex-col">
                <h3 class="font-bold text-lg mb-1 line-clamp-1">{course.title.clone()}</h3>
                <p class="text-sm text-[#86868B] mb-4">{course.instructor.clone()}</p>
                <div class="mt-auto">
                    <ProgressBar percent=course.progress color="bg-[#34C759]" show_label=true/>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Sm class="w-full mt-4">
                        "Continue"
                    </Button>
                </div>
            </div>
        </Card>
    }
}

#[component]
fn Dashboard(enrollment: RwSignal<Enrollment>) -> impl IntoView {
    let deadlines = (1..=3)
        .map(|i| {
            view! {
                <div class="flex items-center gap-4 p-3 rounded-xl hover:bg-[#F5F5F7] transition-colors">
                    <div class="w-12 h-12 rounded-full bg-orange-100 text-orange-600 flex flex-col items-center justify-center font-bold text-sm leading-none">
                        {10 + i}
                        <span class="text-[10px]">"OCT"</span>
                    </div>
                    <div>
                        <p class="font-medium text-sm">{format!("Python Assignment {i}")}</p>
                        <p class="text-xs text-[#86868B]">"11:59 PM"</p>
                    </div>
                    <div class="ml-auto">
                        <Badge color=BadgeColor::Yellow>"Pending"</Badge>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-8">
            <div class="bg-gradient-to-r from-[#0071E3] to-[#5E5CE6] rounded-3xl p-8 text-white shadow-lg">
                <h1 class="text-3xl font-bold mb-2">"Welcome back, Student!"</h1>
                <p class="opacity-90">"You have 2 upcoming deadlines this week. Keep up the momentum."</p>
            </div>

            <div>
                <h2 class="text-xl font-bold text-[#1D1D1F] mb-4">"My Learning"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        enrollment
                            .with(|e| e.active().to_vec())
                            .into_iter()
                            .map(enrolled_card)
                            .collect_view()
                    }}
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Card class="p-6">
                    <h3 class="font-bold mb-4">"Study Activity"</h3>
                    <div class="h-64">
                        <LineChart points=STUDY_ACTIVITY.as_slice() height=256.0/>
                    </div>
                </Card>
                <Card class="p-6">
                    <h3 class="font-bold mb-4">"Upcoming Deadlines"</h3>
                    <div class="space-y-4">{deadlines}</div>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn Catalog(enrollment: RwSignal<Enrollment>, toast: ToastController) -> impl IntoView {
    let filters = CATALOG_FILTERS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let color = if i == 0 { BadgeColor::Blue } else { BadgeColor::Gray };
            view! { <Badge color=color>{*label}</Badge> }
        })
        .collect_view();

    let cards = COURSES
        .iter()
        .map(|course| {
            let selected = course.clone();
            view! {
                <Card class="group">
                    <div class="h-40 overflow-hidden relative">
                        <img
                            src=course.image.clone()
                            alt=course.title.clone()
                            class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                        />
                    </div>
                    <div class="p-5">
                        <div class="flex justify-between items-start mb-2">
                            <Badge>{course.level.as_str()}</Badge>
                            <div class="flex items-center text-yellow-500 text-xs font-bold gap-1">
                                {Icon::Star.glyph()} " " {course.rating}
                            </div>
                        </div>
                        <h3 class="font-bold text-lg mb-1">{course.title.clone()}</h3>
                        <p class="text-sm text-[#86868B] mb-3">{course.instructor.clone()}</p>
                        <div class="flex items-center gap-3 text-xs text-[#86868B] mb-4">
                            <span class="flex items-center gap-1">{Icon::Clock.glyph()} " " {course.duration.clone()}</span>
                            <span>"•"</span>
                            <span>{course.category.clone()}</span>
                        </div>
                        <div class="flex items-center justify-between mt-4 pt-4 border-t border-gray-100">
                            <span class="font-bold text-lg">{course.price.clone()}</span>
                            <Button
                                size=ButtonSize::Sm
                                on:click=move |_| enrollment.update(|e| e.begin_checkout(&selected))
                            >
                                "Enroll Now"
                            </Button>
                        </div>
                    </div>
                </Card>
            }
        })
        .collect_view();

    let open = Signal::derive(move || enrollment.with(Enrollment::is_checkout_open));
    let checkout = move || enrollment.with(|e| e.checkout().cloned());

    let confirm = move |_: MouseEvent| {
        if let Some(course) = enrollment.try_update(Enrollment::confirm_payment).flatten() {
            toast.show(format!("Successfully enrolled in {}", course.title));
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <h1 class="text-2xl font-bold">"Course Catalog"</h1>
                <div class="flex gap-2">{filters}</div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>

            <Modal
                open=open
                on_close=move |_| enrollment.update(Enrollment::cancel_checkout)
                title="Secure Checkout"
            >
                <div class="space-y-6">
                    <div class="flex items-center gap-4 bg-[#F5F5F7] p-4 rounded-xl">
                        <div class="w-16 h-16 rounded-lg bg-gray-300 overflow-hidden">
                            {move || checkout().map(|c| view! {
                                <img src=c.image alt="" class="w-full h-full object-cover"/>
                            })}
                        </div>
                        <div>
                            <p class="font-bold text-sm">{move || checkout().map(|c| c.title)}</p>
                            <p class="text-sm text-[#86868B]">{move || checkout().map(|c| c.price)}</p>
                        </div>
                    </div>

                    <div class="space-y-3">
                        <label class="text-sm font-medium text-[#86868B]">"Payment Method"</label>
                        <div class="flex gap-3">
                            <div class="flex-1 border border-[#0071E3] bg-[#0071E3]/5 p-3 rounded-xl flex items-center justify-center gap-2 cursor-pointer">
                                <span class="text-[#0071E3]">{Icon::CreditCard.glyph()}</span>
                                <span class="text-sm font-semibold text-[#0071E3]">"Card"</span>
                            </div>
                            <div class="flex-1 border border-[#E5E5EA] p-3 rounded-xl flex items-center justify-center gap-2 cursor-pointer hover:bg-gray-50">
                                <span class="text-sm font-semibold">"PayPal"</span>
                            </div>
                        </div>
                    </div>

                    <Button class="w-full" size=ButtonSize::Lg on:click=confirm>
                        "Confirm Payment "
                        {move || checkout().map(|c| c.price)}
                    </Button>
                    <p class="text-xs text-center text-[#86868B] flex items-center justify-center gap-1">
                        {Icon::Lock.glyph()}
                        " Secure 256-bit SSL Encrypted payment"
                    </p>
                </div>
            </Modal>
        </div>
    }
}

#[component]
fn CoursePlayer() -> impl IntoView {
    let lessons = (1..=6)
        .map(|i| {
            let (row, marker, title) = if i == 1 {
                (
                    "p-3 rounded-lg flex items-start gap-3 cursor-pointer bg-[#0071E3]/10",
                    "mt-0.5 text-[#0071E3]",
                    "text-sm font-medium text-[#0071E3]",
                )
            } else {
                (
                    "p-3 rounded-lg flex items-start gap-3 cursor-pointer hover:bg-gray-50",
                    "mt-0.5 text-gray-400",
                    "text-sm font-medium text-[#1D1D1F]",
                )
            };
            let glyph = if i < 2 { Icon::Check.glyph() } else { Icon::PlayCircle.glyph() };
            view! {
                <div class=row>
                    <div class=marker>{glyph}</div>
                    <div>
                        <p class=title>{format!("Lesson {i}: Concept Overview")}</p>
                        <p class="text-xs text-[#86868B]">"12 mins"</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col lg:flex-row gap-6 h-[calc(100vh-8rem)]">
            <div class="flex-1 flex flex-col gap-6">
                <div class="bg-black rounded-2xl w-full aspect-video flex items-center justify-center relative group overflow-hidden shadow-2xl">
                    <img src="https://picsum.photos/800/450" alt="" class="absolute inset-0 w-full h-full object-cover opacity-60"/>
                    <div class="absolute inset-0 flex items-center justify-center gap-4">
                        <span class="text-6xl text-white relative z-10 cursor-pointer hover:scale-110 transition-transform duration-200">
                            {Icon::Play.glyph()}
                        </span>
                    </div>
                    <div class="absolute top-4 right-4 bg-red-600 text-white px-3 py-1 rounded-full text-xs font-bold animate-pulse flex items-center gap-2">
                        <span class="w-2 h-2 bg-white rounded-full"></span>
                        "LIVE"
                    </div>
                    <div class="absolute bottom-0 left-0 right-0 p-4 bg-gradient-to-t from-black/80 to-transparent">
                        <div class="h-1 bg-gray-600 rounded-full w-full mb-2">
                            <div class="h-full bg-[#0071E3] w-1/3 rounded-full relative">
                                <div class="w-3 h-3 bg-white rounded-full absolute -right-1.5 -top-1 shadow"></div>
                            </div>
                        </div>
                        <div class="flex justify-between text-white text-xs font-medium">
                            <span>"04:20"</span>
                            <span>"12:45"</span>
                        </div>
                    </div>
                </div>

                <Card class="p-6 flex-1">
                    <div class="flex justify-between items-start mb-4">
                        <div>
                            <h2 class="text-2xl font-bold">"Introduction to React Hooks"</h2>
                            <p class="text-sm text-[#86868B]">"Lesson 4 • Dr. Sarah Lee"</p>
                        </div>
                        <Button variant=ButtonVariant::Secondary size=ButtonSize::Sm>
                            "Join Live Class"
                        </Button>
                    </div>
                    <div class="prose text-[#86868B]">
                        <p>
                            "In this lesson, we will explore the fundamental concepts of React Hooks and how they \
                             revolutionize state management in functional components. This session includes a live \
                             Q&A at the end."
                        </p>
                    </div>
                    <div class="mt-8 pt-6 border-t border-[#E5E5EA] flex gap-4">
                        <Button variant=ButtonVariant::Outline>{Icon::Download.glyph()} " Resources"</Button>
                        <Button variant=ButtonVariant::Outline>"Discuss"</Button>
                    </div>
                </Card>
            </div>

            <Card class="w-full lg:w-80 flex flex-col h-full overflow-hidden">
                <div class="p-4 border-b border-[#E5E5EA] bg-gray-50">
                    <h3 class="font-bold">"Course Content"</h3>
                    <p class="text-xs text-[#86868B]">"4/12 Completed"</p>
                </div>
                <div class="flex-1 overflow-y-auto p-2 space-y-1">{lessons}</div>
            </Card>
        </div>
    }
}

#[component]
fn Assessments(toast: ToastController) -> impl IntoView {
    let pending = fixtures::assessments_with_status(AssessmentStatus::Pending)
        .map(|item| {
            let kind = item.kind;
            let color = match kind {
                AssessmentKind::Exam => BadgeColor::Red,
                AssessmentKind::Assignment => BadgeColor::Blue,
            };
            view! {
                <div class="p-4 border border-[#E5E5EA] rounded-xl hover:bg-gray-50 transition-colors">
                    <div class="flex justify-between items-start mb-2">
                        <Badge color=color>{kind.as_str()}</Badge>
                        <span class="text-xs font-medium text-orange-600">{format!("Due {}", item.due)}</span>
                    </div>
                    <h4 class="font-bold text-[#1D1D1F]">{item.title.clone()}</h4>
                    <p class="text-sm text-[#86868B] mb-4">{item.course.clone()}</p>
                    <Button
                        size=ButtonSize::Sm
                        class="w-full"
                        on:click=move |_| toast.show(kind.started_message())
                    >
                        {kind.action_label()}
                    </Button>
                </div>
            }
        })
        .collect_view();

    let submitted = fixtures::assessments_with_status(AssessmentStatus::Submitted)
        .map(|item| {
            view! {
                <div class="p-4 bg-gray-50 rounded-xl opacity-80">
                    <div class="flex justify-between items-start mb-2">
                        <Badge color=BadgeColor::Green>"Submitted"</Badge>
                        <span class="text-xs font-medium text-[#86868B]">{item.due.clone()}</span>
                    </div>
                    <h4 class="font-bold text-[#1D1D1F]">{item.title.clone()}</h4>
                    <p class="text-sm text-[#86868B] mb-2">{item.course.clone()}</p>
                    <div class="text-xs text-green-600 font-medium flex items-center gap-1">
                        {Icon::Check.glyph()} " Graded: A (92%)"
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-2">
                <h1 class="text-2xl font-bold">"Assessments & Exams"</h1>
                <p class="text-[#86868B]">"Manage your digital submissions and take online examinations."</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <Card class="p-6">
                    <h3 class="font-bold mb-4 flex items-center gap-2">
                        <span class="text-orange-500">"!"</span>
                        "Pending Items"
                    </h3>
                    <div class="space-y-4">{pending}</div>
                </Card>
                <Card class="p-6">
                    <h3 class="font-bold mb-4 flex items-center gap-2">
                        <span class="text-green-500">{Icon::Check.glyph()}</span>
                        "Completed"
                    </h3>
                    <div class="space-y-4">{submitted}</div>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn Profile(toast: ToastController) -> impl IntoView {
    let skills = SKILLS
        .iter()
        .map(|skill| {
            let color = match *skill {
                "React" => BadgeColor::Green,
                "Design" => BadgeColor::Gray,
                _ => BadgeColor::Blue,
            };
            view! { <Badge color=color>{*skill}</Badge> }
        })
        .collect_view();

    let certificates = (1..=2)
        .map(|_| {
            view! {
                <Card class="p-0 overflow-hidden group">
                    <div class="h-48 bg-[#F5F5F7] flex items-center justify-center relative border-b border-[#E5E5EA]">
                        <div class="text-center p-4">
                            <div class="text-4xl mb-2">{Icon::Award.glyph()}</div>
                            <h4 class="font-serif font-bold text-[#1D1D1F]">"Certificate of Completion"</h4>
                            <p class="text-xs text-[#86868B] mt-1">"Advanced Python"</p>
                        </div>
                        <div class="absolute inset-0 bg-black/5 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center">
                            <Button
                                size=ButtonSize::Sm
                                class="shadow-xl"
                                on:click=move |_| toast.show("Certificate downloaded successfully")
                            >
                                {Icon::Download.glyph()}
                                " Download"
                            </Button>
                        </div>
                    </div>
                    <div class="p-4 flex justify-between items-center bg-white">
                        <span class="text-xs text-[#86868B]">"Issued: Oct 2023"</span>
                        <Badge color=BadgeColor::Green>"Verified"</Badge>
                    </div>
                </Card>
            }
        })
        .collect_view();

    view! {
        <div class="flex flex-col md:flex-row gap-8">
            <div class="w-full md:w-1/3 space-y-6">
                <Card class="p-6 text-center">
                    <div class="w-24 h-24 rounded-full bg-gradient-to-br from-[#0071E3] to-[#5E5CE6] mx-auto mb-4 flex items-center justify-center text-3xl font-bold text-white shadow-lg">
                        "S"
                    </div>
                    <h2 class="text-xl font-bold">"Student User"</h2>
                    <p class="text-[#86868B] text-sm mb-4">"Computer Science Major"</p>
                    <Button variant=ButtonVariant::Outline class="w-full">"Edit Profile"</Button>
                </Card>
                <Card class="p-6">
                    <h3 class="font-bold mb-4">"Skills"</h3>
                    <div class="flex flex-wrap gap-2">{skills}</div>
                </Card>
            </div>

            <div class="flex-1 space-y-6">
                <h2 class="text-2xl font-bold">"My Certificates"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">{certificates}</div>
            </div>
        </div>
    }
}
