//! English strings. Every key used in the UI must exist here; other locales
//! fall back to this table.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // nav + chrome
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.services", "Services"),
    ("nav.portfolio", "Portfolio"),
    ("nav.blog", "Blog"),
    ("nav.contact", "Contact"),
    ("nav.shop", "Shop"),
    ("nav.cart", "Cart"),
    ("nav.login", "Sign in"),
    ("nav.register", "Create account"),
    ("nav.logout", "Sign out"),
    ("ui.menu", "Menu"),
    ("ui.sidebar", "Toggle sidebar"),
    ("ui.language", "Language"),
    ("ui.toggle_theme", "Toggle dark mode"),
    ("footer.tagline", "Precision metal fabrication since 1998."),
    // common
    ("common.all", "All"),
    ("common.cancel", "Cancel"),
    ("common.confirm", "Confirm"),
    ("common.customer", "Customer"),
    ("common.date", "Date"),
    ("common.delete", "Delete"),
    ("common.deleted", "Deleted."),
    ("common.details", "Details"),
    ("common.dismiss", "Dismiss"),
    ("common.edit", "Edit"),
    ("common.empty", "Nothing here yet."),
    ("common.hide", "Hide"),
    ("common.loading", "Loading…"),
    ("common.new", "New"),
    ("common.next", "Next"),
    ("common.pages", "Pages"),
    ("common.previous", "Previous"),
    ("common.refresh", "Refresh"),
    ("common.remove", "Remove"),
    ("common.retry", "Try again"),
    ("common.save", "Save"),
    ("common.saved", "Saved."),
    ("common.search", "Search…"),
    ("common.status", "Status"),
    // errors
    ("error.network", "Could not reach the server. Check your connection."),
    ("error.unauthorized", "Your session has expired. Please sign in again."),
    ("error.forbidden", "You do not have access to that."),
    ("error.not_found", "That item no longer exists."),
    ("error.validation", "Some fields need attention."),
    ("error.server", "Something went wrong on our side. Please try again."),
    ("validation.required", "Please fill in all required fields."),
    ("validation.email", "Enter a valid email address."),
    ("validation.phone", "Enter a valid phone number."),
    ("validation.password_short", "Passwords need at least 8 characters."),
    ("validation.password_mismatch", "Passwords do not match."),
    ("validation.date", "Enter a date as YYYY-MM-DD."),
    ("validation.time", "Enter a time as HH:MM."),
    ("validation.price", "Enter a price greater than zero."),
    ("validation.stock", "Stock must be a whole number."),
    ("validation.quantity", "Quantity must be a positive whole number."),
    ("validation.slug", "Slugs use lowercase letters, digits and single dashes."),
    ("upload.hint", "Accepted:"),
    ("upload.too_large", "File too large"),
    ("upload.bad_type", "Unsupported file type"),
    ("upload.too_many", "Too many files"),
    // forms
    ("form.name", "Name"),
    ("form.full_name", "Full name"),
    ("form.email", "Email"),
    ("form.phone", "Phone"),
    ("form.password", "Password"),
    ("form.confirm_password", "Confirm password"),
    ("form.subject", "Subject"),
    ("form.message", "Message"),
    ("form.address", "Address"),
    ("form.city", "City"),
    ("form.postal_code", "Postal code"),
    ("form.country", "Country"),
    ("form.service", "Service"),
    ("form.choose", "Choose…"),
    ("form.date", "Date"),
    ("form.time", "Time"),
    ("form.notes", "Notes"),
    ("form.title", "Title"),
    ("form.description", "Description"),
    // marketing
    ("home.title", "Steel, shaped to your drawings."),
    ("home.subtitle", "Custom welding, laser cutting and architectural metalwork for homes and industry."),
    ("home.cta_quote", "Request a quote"),
    ("home.cta_shop", "Browse the shop"),
    ("home.featured", "What we build"),
    ("home.all_services", "All services"),
    ("home.why_title", "Why Forgeline"),
    ("home.why_precision", "Tolerances to a tenth of a millimetre on every cut."),
    ("home.why_materials", "Certified steel, stainless and aluminium stock."),
    ("home.why_turnaround", "Most jobs delivered within two weeks."),
    ("about.title", "About us"),
    ("about.subtitle", "A family workshop that grew into a full fabrication shop."),
    ("about.story", "Forgeline started as a two-person welding bay and now runs laser, press brake and powder coating lines under one roof."),
    ("about.value_quality", "Quality"),
    ("about.value_quality_text", "Every part is measured before it leaves the floor."),
    ("about.value_safety", "Safety"),
    ("about.value_safety_text", "Certified welders and audited procedures."),
    ("about.value_service", "Service"),
    ("about.value_service_text", "One contact from drawing to delivery."),
    ("about.cta", "Talk to us"),
    ("services.title", "Services"),
    ("services.subtitle", "From one-off repairs to production runs."),
    ("services.cta", "Ask for a quote"),
    ("portfolio.title", "Portfolio"),
    ("portfolio.subtitle", "Recent projects from the shop floor."),
    ("blog.title", "Blog"),
    ("blog.subtitle", "Notes on materials, methods and projects."),
    ("blog.read_more", "Read more"),
    ("blog.back", "Back to the blog"),
    ("blog.slug", "Slug"),
    ("blog.excerpt", "Excerpt"),
    ("blog.body", "Body (markdown)"),
    ("blog.cover", "Cover image"),
    ("blog.published", "Published"),
    ("blog.state_published", "Published"),
    ("blog.state_draft", "Draft"),
    ("blog.write", "Write"),
    ("blog.preview", "Preview"),
    ("blog.confirm_delete", "Delete this post?"),
    ("contact.title", "Contact"),
    ("contact.subtitle", "Tell us about your project and we will reply within one business day."),
    ("contact.send", "Send message"),
    ("contact.sent", "Thanks! Your message is on its way."),
    ("contact.visit", "Visit the shop"),
    ("contact.hours", "Mon–Fri 7:00–17:00"),
    ("not_found.title", "Page not found"),
    ("not_found.subtitle", "The page you are looking for does not exist."),
    ("not_found.home", "Back to home"),
    // shop
    ("shop.title", "Shop"),
    ("shop.subtitle", "Brackets, hardware and ready-made pieces."),
    ("shop.search", "Search products"),
    ("shop.all_categories", "All categories"),
    ("shop.no_results", "No products match your filters."),
    ("shop.add_to_cart", "Add to cart"),
    ("shop.in_stock", "In stock"),
    ("shop.out_of_stock", "Out of stock"),
    ("shop.back", "Back to the shop"),
    ("cart.title", "Your cart"),
    ("cart.empty", "Your cart is empty."),
    ("cart.added", "Added to cart."),
    ("cart.capped", "Quantity limited to available stock."),
    ("cart.product", "Product"),
    ("cart.price", "Price"),
    ("cart.quantity", "Quantity"),
    ("cart.line_total", "Total"),
    ("cart.subtotal", "Subtotal"),
    ("cart.tax", "Tax"),
    ("cart.shipping", "Shipping"),
    ("cart.free_shipping", "Free"),
    ("cart.total", "Total"),
    ("cart.clear", "Empty cart"),
    ("cart.continue", "Continue shopping"),
    ("cart.checkout", "Checkout"),
    ("checkout.title", "Checkout"),
    ("checkout.shipping", "Shipping address"),
    ("checkout.summary", "Order summary"),
    ("checkout.notes", "Delivery notes"),
    ("checkout.payment_note", "Payment is arranged on delivery or by invoice."),
    ("checkout.place_order", "Place order"),
    ("checkout.placed", "Order placed. Thank you!"),
    // auth
    ("auth.login_title", "Sign in"),
    ("auth.register_title", "Create your account"),
    ("auth.login", "Sign in"),
    ("auth.register", "Create account"),
    ("auth.no_account", "No account yet?"),
    ("auth.have_account", "Already registered?"),
    ("auth.password_hint", "At least 8 characters."),
    ("auth.welcome", "Welcome!"),
    ("auth.invalid_credentials", "Email or password is incorrect."),
    ("auth.account_disabled", "This account has been disabled."),
    ("role.customer", "Customer"),
    ("role.employee", "Employee"),
    ("role.admin", "Admin"),
    // customer dashboard
    ("dash.title", "My account"),
    ("dash.overview", "Overview"),
    ("dash.appointments", "Appointments"),
    ("dash.quotations", "Quotations"),
    ("dash.orders", "Orders"),
    ("dash.messages", "Messages"),
    ("dash.welcome", "Welcome back"),
    ("dash.upcoming_appointments", "Upcoming appointments"),
    ("dash.quotes_to_answer", "Quotes to answer"),
    ("dash.open_orders", "Open orders"),
    ("dash.book_appointment", "Book an appointment"),
    ("dash.request_quote", "Request a quote"),
    ("appointments.book_title", "Book a visit"),
    ("appointments.book", "Book"),
    ("appointments.booked", "Appointment booked."),
    ("appointments.cancelled", "Appointment cancelled."),
    ("appointments.confirm_cancel", "Cancel this appointment?"),
    ("appointments.none", "No appointments yet."),
    ("appointment_status.pending", "Pending"),
    ("appointment_status.confirmed", "Confirmed"),
    ("appointment_status.completed", "Completed"),
    ("appointment_status.cancelled", "Cancelled"),
    ("quotations.request_title", "Request a quote"),
    ("quotations.material", "Material"),
    ("quotations.quantity", "Quantity"),
    ("quotations.deadline", "Needed by"),
    ("quotations.attachments", "Drawings and documents"),
    ("quotations.submit", "Send request"),
    ("quotations.sent", "Quote request sent."),
    ("quotations.none", "No quotation requests yet."),
    ("quotations.price", "Price"),
    ("quotations.accept", "Accept"),
    ("quotations.reject", "Decline"),
    ("quotations.accepted", "Quote accepted."),
    ("quotations.rejected", "Quote declined."),
    ("quotations.send_quote", "Send quote"),
    ("quotations.quote_sent", "Quote sent to the customer."),
    ("quotation_status.pending", "Pending"),
    ("quotation_status.quoted", "Quoted"),
    ("quotation_status.accepted", "Accepted"),
    ("quotation_status.rejected", "Declined"),
    ("orders.none", "No orders yet."),
    ("order_status.pending", "Pending"),
    ("order_status.processing", "Processing"),
    ("order_status.shipped", "Shipped"),
    ("order_status.delivered", "Delivered"),
    ("order_status.cancelled", "Cancelled"),
    ("messages.none", "No messages yet. Ask us anything."),
    ("messages.placeholder", "Write a message…"),
    ("messages.send", "Send"),
    // back-office
    ("admin.title", "Back-office"),
    ("admin.analytics", "Analytics"),
    ("admin.users", "Users"),
    ("admin.employees", "Employees"),
    ("admin.appointments", "Appointments"),
    ("admin.quotations", "Quotations"),
    ("admin.tasks", "Tasks"),
    ("admin.products", "Products"),
    ("admin.orders", "Orders"),
    ("admin.blog", "Blog"),
    ("analytics.revenue", "Revenue"),
    ("analytics.orders", "Orders"),
    ("analytics.customers", "Customers"),
    ("analytics.pending_quotations", "Pending quotations"),
    ("analytics.upcoming_appointments", "Upcoming appointments"),
    ("analytics.monthly_revenue", "Monthly revenue"),
    ("users.role", "Role"),
    ("users.active", "Active"),
    ("users.joined", "Joined"),
    ("users.confirm_delete", "Delete this user? This cannot be undone."),
    ("employees.position", "Position"),
    ("employees.confirm_delete", "Remove this employee?"),
    ("tasks.assignee", "Assignee"),
    ("tasks.unassigned", "Unassigned"),
    ("tasks.due_date", "Due"),
    ("tasks.priority", "Priority"),
    ("tasks.confirm_delete", "Delete this task?"),
    ("task_status.todo", "To do"),
    ("task_status.in_progress", "In progress"),
    ("task_status.done", "Done"),
    ("priority.low", "Low"),
    ("priority.medium", "Medium"),
    ("priority.high", "High"),
    ("products.category", "Category"),
    ("products.price", "Price"),
    ("products.stock", "Stock"),
    ("products.active", "Listed"),
    ("products.image", "Photo"),
    ("products.confirm_delete", "Delete this product?"),
];
