//! Route table: public pages at the root, the admin area nested behind
//! the auth gate. Admin detail routes use `:id`, with the literal `"new"`
//! id meaning "create".

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::domain::blog::{form::BlogForm, list::BlogList};
use crate::domain::comment::{form::CommentForm, list::CommentList};
use crate::domain::event::{form::EventForm, list::EventList};
use crate::domain::forum_category::{form::ForumCategoryForm, list::ForumCategoryList};
use crate::domain::forum_post::{form::ForumPostForm, list::ForumPostList};
use crate::domain::note::{form::NoteForm, list::NoteList};
use crate::domain::shortlink::{form::ShortlinkForm, list::ShortlinkList};
use crate::layout::{AdminLayout, SiteShell};
use crate::pages::admin_home::AdminHome;
use crate::pages::blog::{PublicBlogList, PublicBlogPost};
use crate::pages::forum::PublicForum;
use crate::pages::home::HomePage;
use crate::pages::information::InformationPage;
use crate::pages::not_found::NotFound;
use crate::pages::profile::ProfilePage;
use crate::system::auth::AdminGate;
use crate::system::groups::{form::GroupForm, list::GroupList};
use crate::system::users::{form::UserForm, list::UserList};

#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <AdminGate>
            <AdminLayout />
        </AdminGate>
    }
}

#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFound>
                <ParentRoute path=path!("") view=SiteShell>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("blog") view=PublicBlogList />
                    <Route path=path!("blog/:id") view=PublicBlogPost />
                    <Route path=path!("forum") view=PublicForum />
                    <Route path=path!("information") view=InformationPage />
                    <Route path=path!("profile") view=ProfilePage />
                    <ParentRoute path=path!("admin") view=AdminArea>
                        <Route path=path!("") view=AdminHome />
                        <Route path=path!("blog") view=BlogList />
                        <Route path=path!("blog/:id") view=BlogForm />
                        <Route path=path!("events") view=EventList />
                        <Route path=path!("events/:id") view=EventForm />
                        <Route path=path!("forum") view=ForumPostList />
                        <Route path=path!("forum/:id") view=ForumPostForm />
                        <Route path=path!("forum-categories") view=ForumCategoryList />
                        <Route path=path!("forum-categories/:id") view=ForumCategoryForm />
                        <Route path=path!("comments") view=CommentList />
                        <Route path=path!("comments/:id") view=CommentForm />
                        <Route path=path!("notes") view=NoteList />
                        <Route path=path!("notes/:id") view=NoteForm />
                        <Route path=path!("shortlinks") view=ShortlinkList />
                        <Route path=path!("shortlinks/:id") view=ShortlinkForm />
                        <Route path=path!("users") view=UserList />
                        <Route path=path!("users/:id") view=UserForm />
                        <Route path=path!("groups") view=GroupList />
                        <Route path=path!("groups/:id") view=GroupForm />
                    </ParentRoute>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
