use leptos::prelude::*;

#[component]
pub fn InformationPage() -> impl IntoView {
    view! {
        <div style="max-width: 720px; margin: 0 auto; padding: 24px 20px; line-height: 1.6;">
            <h2 style="margin-top: 0;">"About the union"</h2>
            <p>
                "The student union is the voice of all enrolled students. We organize "
                "social and academic events, run the campus forum, and represent "
                "students towards the university administration."
            </p>
            <h3>"Contact"</h3>
            <p>
                "Visit us in the union office during opening hours, or write a post "
                "in the forum. Board members answer within a few days."
            </p>
            <h3>"Membership"</h3>
            <p>
                "Every enrolled student is automatically a member. Member-only "
                "content becomes visible after signing in."
            </p>
        </div>
    }
}
