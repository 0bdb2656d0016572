//! Seed data, a small slice of the public placeholder dataset.

use crate::{Company, Post, Todo, User};

#[allow(clippy::too_many_arguments)]
fn user(id: u32, name: &str, username: &str, email: &str, phone: &str, website: &str, company: &str, catch_phrase: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        website: website.to_string(),
        company: Company {
            name: company.to_string(),
            catch_phrase: catch_phrase.to_string(),
        },
    }
}

pub(crate) fn users() -> Vec<User> {
    vec![
        user(1, "Leanne Graham", "Bret", "Sincere@april.biz", "1-770-736-8031 x56442", "hildegard.org", "Romaguera-Crona", "Multi-layered client-server neural-net"),
        user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "010-692-6593 x09125", "anastasia.net", "Deckow-Crist", "Proactive didactic contingency"),
        user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net", "1-463-123-4447", "ramiro.info", "Romaguera-Jacobson", "Face to face bifurcated interface"),
        user(4, "Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org", "493-170-9623 x156", "kale.biz", "Robel-Corkery", "Multi-tiered zero tolerance productivity"),
    ]
}

fn post(id: u32, user_id: u32, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// User 4 deliberately has no posts.
pub(crate) fn posts() -> Vec<Post> {
    vec![
        post(1, 1, "sunt aut facere repellat provident occaecati excepturi optio reprehenderit", "quia et suscipit suscipit recusandae consequuntur expedita et cum"),
        post(2, 1, "qui est esse", "est rerum tempore vitae sequi sint nihil reprehenderit dolor beatae ea dolores neque"),
        post(3, 1, "ea molestias quasi exercitationem repellat qui ipsa sit aut", "et iusto sed quo iure voluptatem occaecati omnis eligendi aut ad"),
        post(11, 2, "et ea vero quia laudantium autem", "delectus reiciendis molestiae occaecati non minima eveniet qui voluptatibus"),
        post(12, 2, "in quibusdam tempore odit est dolorem", "itaque id aut magnam praesentium quia et ea odit et ea voluptas et"),
        post(21, 3, "asperiores ea ipsam voluptatibus modi minima quia sint", "repellat aliquid praesentium dolorem quo sed totam minus non itaque"),
    ]
}

fn todo(id: u32, user_id: u32, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        user_id,
        title: title.to_string(),
        completed,
    }
}

pub(crate) fn todos() -> Vec<Todo> {
    vec![
        todo(1, 1, "delectus aut autem", false),
        todo(2, 1, "quis ut nam facilis et officia qui", false),
        todo(3, 1, "fugiat veniam minus", false),
        todo(4, 1, "et porro tempora", true),
        todo(5, 2, "laboriosam mollitia et enim quasi adipisci quia provident illum", false),
    ]
}
