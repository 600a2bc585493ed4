//! Server-side assembly of the listing page.
//!
//! The whole UI is one page: the current shelf as a table, plus the add
//! form. Handlers re-read storage and re-render on every GET, so the page
//! never carries client-side state.

use crate::db::DbBook;

/// Render the full listing page.
///
/// `track_progress` controls whether the pages-read column, the per-row
/// "done today" link and the form's `pages_read` input are emitted at all.
pub fn book_list_page(books: &[DbBook], track_progress: bool) -> String {
    let mut page = String::with_capacity(1024 + books.len() * 256);
    page.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Shelf</title>\n\
         </head>\n\
         <body>\n\
         <h1>My books</h1>\n",
    );

    if books.is_empty() {
        page.push_str("<p>No books yet.</p>\n");
    } else {
        page.push_str("<table>\n<tr><th>Title</th><th>Author</th>");
        if track_progress {
            page.push_str("<th>Pages read</th>");
        }
        page.push_str("<th></th></tr>\n");
        for book in books {
            push_book_row(&mut page, book, track_progress);
        }
        page.push_str("</table>\n");
    }

    page.push_str(
        "<h2>Add a book</h2>\n\
         <form action=\"/add_book\" method=\"post\">\n\
         <label>Title <input type=\"text\" name=\"title\"></label>\n\
         <label>Author <input type=\"text\" name=\"author\"></label>\n",
    );
    if track_progress {
        page.push_str("<label>Pages read <input type=\"number\" name=\"pages_read\"></label>\n");
    }
    page.push_str(
        "<button type=\"submit\">Add</button>\n\
         </form>\n\
         </body>\n\
         </html>\n",
    );
    page
}

fn push_book_row(page: &mut String, book: &DbBook, track_progress: bool) {
    page.push_str("<tr><td>");
    page.push_str(&escape_html(&book.title));
    page.push_str("</td><td>");
    page.push_str(&escape_html(&book.author));
    page.push_str("</td>");
    if track_progress {
        page.push_str(&format!("<td>{}</td>", book.pages_read));
    }
    page.push_str(&format!("<td><a href=\"/delete_book/{}\">delete</a>", book.id));
    if track_progress {
        page.push_str(&format!(" <a href=\"/done_today/{}\">done today</a>", book.id));
    }
    page.push_str("</td></tr>\n");
}

/// Escape user-supplied text for interpolation into HTML body or
/// double-quoted attribute positions.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
